//! Pixel color for a monochrome panel.

use embedded_graphics::pixelcolor::BinaryColor;

/// State of a single pixel.
///
/// The framebuffer stores bit = 1 for [`Color::On`]. Whether an "on" pixel is
/// lit or dark on the panel depends on the inversion mode, see
/// [`crate::driver::Ssd1306::set_invert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Pixel bit cleared.
    Off,
    /// Pixel bit set.
    On,
}

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::Off => Color::Off,
            BinaryColor::On => Color::On,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Off => BinaryColor::Off,
            Color::On => BinaryColor::On,
        }
    }
}
