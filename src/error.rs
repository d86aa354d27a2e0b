//! Driver error types.
//!
//! Transport failures are reported as [`display_interface::DisplayError`],
//! shared with the rest of the display-driver ecosystem. The types here cover
//! the failures that happen before or instead of any bus traffic.

use thiserror::Error;

use crate::interface::TransportKind;

/// Fatal configuration error, raised before any hardware I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested product code has no entry in the variant table.
    #[error("unknown product code {0:#06x}")]
    UnknownProduct(u16),
    /// The supplied interface does not speak the transport the product needs.
    #[error("product requires {expected:?} transport, interface is {found:?}")]
    TransportMismatch {
        /// Transport the variant table prescribes.
        expected: TransportKind,
        /// Transport the supplied interface implements.
        found: TransportKind,
    },
}

/// A drawing coordinate outside the active geometry.
///
/// Recoverable: the framebuffer is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pixel ({x}, {y}) is outside the active display area")]
pub struct OutOfBounds {
    /// Rejected x coordinate.
    pub x: u8,
    /// Rejected y coordinate.
    pub y: u8,
}
