//! Drawing support on top of [`Ssd1306::set_pixel`].
//!
//! Rasterization is delegated to `embedded-graphics`: the driver implements
//! [`DrawTarget`] with `set_pixel` as the sole drawing entry point, and the
//! convenience wrappers below build the usual line / rectangle / text calls
//! on the embedded-graphics primitives. Everything here mutates only the
//! framebuffer; call [`Ssd1306::flush`] to show the result.

use core::convert::Infallible;

use embedded_graphics::mono_font::iso_8859_15::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::color::Color;
use crate::driver::Ssd1306;
use crate::interface::RegisterInterface;

/// Unwrap a drawing result whose error type is uninhabited.
fn completed<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<DI> OriginDimensions for Ssd1306<DI>
where
    DI: RegisterInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<DI> DrawTarget for Ssd1306<DI>
where
    DI: RegisterInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        for Pixel(point, color) in pixels {
            // Pixels outside the drawable area are ignored, per the
            // DrawTarget contract; the strict bounds check stays on the
            // direct set_pixel API.
            if let (Ok(x), Ok(y)) = (u8::try_from(point.x), u8::try_from(point.y)) {
                self.framebuffer_mut().set_pixel(x, y, color.into()).ok();
            }
        }
        Ok(())
    }
}

impl<DI> Ssd1306<DI>
where
    DI: RegisterInterface,
{
    /// Draw a line between two points.
    pub fn draw_line(&mut self, x_start: u8, y_start: u8, x_stop: u8, y_stop: u8, color: Color) {
        let style = PrimitiveStyle::with_stroke(color.into(), 1);
        completed(
            Line::new(
                Point::new(i32::from(x_start), i32::from(y_start)),
                Point::new(i32::from(x_stop), i32::from(y_stop)),
            )
            .into_styled(style)
            .draw(self),
        );
    }

    /// Draw a horizontal line of `width` pixels starting at (x, y).
    pub fn draw_hline(&mut self, x: u8, y: u8, width: u8, color: Color) {
        self.draw_line(x, y, x.saturating_add(width), y, color);
    }

    /// Draw a vertical line of `height` pixels starting at (x, y).
    pub fn draw_vline(&mut self, x: u8, y: u8, height: u8, color: Color) {
        self.draw_line(x, y, x, y.saturating_add(height), color);
    }

    /// Draw a rectangle, outlined or filled.
    pub fn draw_rect(&mut self, x: u8, y: u8, width: u8, height: u8, color: Color, fill: bool) {
        let style = if fill {
            PrimitiveStyle::with_fill(color.into())
        } else {
            PrimitiveStyle::with_stroke(color.into(), 1)
        };
        completed(
            Rectangle::new(
                Point::new(i32::from(x), i32::from(y)),
                Size::new(u32::from(width), u32::from(height)),
            )
            .into_styled(style)
            .draw(self),
        );
    }

    /// Draw a single character with the built-in 5x8 font, (x, y) being the
    /// top-left corner of the glyph cell.
    pub fn draw_char(&mut self, x: u8, y: u8, c: char, color: Color) {
        let mut buf = [0u8; 4];
        self.draw_string(x, y, c.encode_utf8(&mut buf), color);
    }

    /// Draw a string with the built-in 5x8 font.
    ///
    /// Rendering stops at the first newline, like the classic C API this
    /// mirrors; lay out multi-line text caller-side.
    pub fn draw_string(&mut self, x: u8, y: u8, text: &str, color: Color) {
        let line = text.split('\n').next().unwrap_or("");
        let style = MonoTextStyle::new(&FONT_5X8, color.into());
        completed(
            Text::with_baseline(
                line,
                Point::new(i32::from(x), i32::from(y)),
                style,
                Baseline::Top,
            )
            .draw(self),
        );
    }
}
