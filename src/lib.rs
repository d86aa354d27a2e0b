//! SSD1306 OLED Display Driver
//!
//! Driver for SSD1306-family monochrome OLED modules, built around a packed
//! 1-bit-per-pixel framebuffer and an explicit flush protocol. Commands and
//! pixel data travel over a register-oriented transport; I2C is implemented,
//! SPI and parallel are extension points.
//!
//! ### Usage
//! Drawing never touches the hardware on its own. To display something you:
//!
//! 1. pick the attached [`variant::Product`] and wrap your bus in an
//!    [`interface::I2cInterface`]
//! 1. construct the device with [`driver::Ssd1306::new`] and bring it up with
//!    [`driver::Ssd1306::init`] (or `init_with_reset` when the RES pin is
//!    wired)
//! 1. draw into the framebuffer, either through
//!    [`driver::Ssd1306::set_pixel`], the line/rect/text wrappers, or
//!    `embedded_graphics` against the [`DrawTarget`] impl
//! 1. push the buffer to the panel with [`driver::Ssd1306::flush`]
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod cmd;
pub mod color;
pub mod driver;
pub mod error;
pub mod flag;
pub mod framebuffer;
pub mod graphics;
pub mod interface;
pub mod variant;

/// Maximum display width this driver supports, in pixels.
pub const MAX_WIDTH: u8 = 128;

/// Maximum display height this driver supports, in pixels.
pub const MAX_HEIGHT: u8 = 64;

pub use crate::cmd::Cmd;
pub use crate::color::Color;
pub use crate::driver::{DisplayError, Ssd1306};
pub use crate::error::{ConfigError, OutOfBounds};
pub use crate::flag::Flag;
pub use crate::framebuffer::{Framebuffer, BUFFER_DIMENSION};
pub use crate::interface::{
    I2cInterface, ParallelInterface, RegisterInterface, SpiInterface, TransportKind,
};
pub use crate::variant::{ComSegmentBlock, DisplayConfig, Product, VariantProfile};
