//! In-memory pixel store, decoupled from the transport.
//!
//! One bit per pixel, packed in 8-row "pages": byte `i = x + (y / 8) * width`
//! holds pixels `(x, 8*(y/8))..(x, 8*(y/8)+7)`, bit `y % 8` within the byte.
//! Bit set means [`Color::On`]. The backing array is sized for the maximum
//! supported geometry; the active geometry is fixed at construction and
//! enforced per draw call.

use crate::color::Color;
use crate::error::OutOfBounds;
use crate::{MAX_HEIGHT, MAX_WIDTH};

/// Backing buffer size for the maximum supported geometry, in bytes.
pub const BUFFER_DIMENSION: usize = MAX_WIDTH as usize * MAX_HEIGHT as usize / 8;

/// Packed 1-bit-per-pixel framebuffer with page-addressed layout.
pub struct Framebuffer {
    width: u8,
    height: u8,
    buffer: [u8; BUFFER_DIMENSION],
}

impl Framebuffer {
    /// Zeroed framebuffer with the given active geometry.
    pub(crate) fn new(width: u8, height: u8) -> Self {
        debug_assert!(width <= MAX_WIDTH && height <= MAX_HEIGHT);
        debug_assert!(height % 8 == 0);
        Framebuffer {
            width,
            height,
            buffer: [0x00; BUFFER_DIMENSION],
        }
    }

    /// Active width in pixels.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Active height in pixels.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Page count of the active geometry.
    pub fn pages(&self) -> u8 {
        self.height / 8
    }

    /// Set or clear one pixel.
    ///
    /// Coordinates outside the active geometry are rejected with
    /// [`OutOfBounds`] and leave the buffer untouched; there is no wraparound
    /// or clamping.
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) -> Result<(), OutOfBounds> {
        if x >= self.width || y >= self.height {
            return Err(OutOfBounds { x, y });
        }

        let index = usize::from(x) + usize::from(y / 8) * usize::from(self.width);
        let mask = 1 << (y % 8);
        match color {
            Color::On => self.buffer[index] |= mask,
            Color::Off => self.buffer[index] &= !mask,
        }
        Ok(())
    }

    /// Read one pixel back from the packed buffer.
    ///
    /// Returns `None` outside the active geometry.
    pub fn pixel(&self, x: u8, y: u8) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = usize::from(x) + usize::from(y / 8) * usize::from(self.width);
        if self.buffer[index] & (1 << (y % 8)) != 0 {
            Some(Color::On)
        } else {
            Some(Color::Off)
        }
    }

    /// Zero the whole buffer.
    ///
    /// This only mutates the in-memory model; the panel keeps showing its
    /// previous content until the next [`crate::driver::Ssd1306::flush`].
    pub fn clear(&mut self) {
        self.buffer = [0x00; BUFFER_DIMENSION];
    }

    /// The active region as a packed byte slice, in the page-major order the
    /// controller expects while streaming: page 0 first, columns left to
    /// right within each page.
    pub fn as_bytes(&self) -> &[u8] {
        let active = usize::from(self.width) * usize::from(self.pages());
        &self.buffer[..active]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum(fb: &Framebuffer) -> u32 {
        fb.buffer.iter().map(|&b| u32::from(b)).sum()
    }

    #[test]
    fn set_then_read_round_trip() {
        let mut fb = Framebuffer::new(128, 32);
        for &(x, y) in &[(0, 0), (127, 31), (64, 7), (64, 8), (3, 17)] {
            fb.set_pixel(x, y, Color::On).unwrap();
            assert_eq!(fb.pixel(x, y), Some(Color::On), "pixel ({x}, {y})");
            fb.set_pixel(x, y, Color::Off).unwrap();
            assert_eq!(fb.pixel(x, y), Some(Color::Off), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn byte_and_bit_addressing_matches_layout() {
        let mut fb = Framebuffer::new(128, 32);
        // (x, y) lands in byte x + (y/8)*width, bit y%8.
        fb.set_pixel(0, 0, Color::On).unwrap();
        fb.set_pixel(127, 31, Color::On).unwrap();
        fb.set_pixel(5, 10, Color::On).unwrap();
        assert_eq!(fb.buffer[0], 0x01);
        assert_eq!(fb.buffer[127 + 3 * 128], 0x80);
        assert_eq!(fb.buffer[5 + 128], 1 << 2);
    }

    #[test]
    fn out_of_bounds_is_rejected_and_buffer_unchanged() {
        let mut fb = Framebuffer::new(128, 32);
        fb.set_pixel(10, 10, Color::On).unwrap();
        let before = checksum(&fb);

        assert_eq!(
            fb.set_pixel(128, 0, Color::On),
            Err(OutOfBounds { x: 128, y: 0 })
        );
        assert_eq!(
            fb.set_pixel(0, 32, Color::On),
            Err(OutOfBounds { x: 0, y: 32 })
        );
        assert_eq!(fb.pixel(128, 0), None);
        assert_eq!(checksum(&fb), before);
    }

    #[test]
    fn rows_32_to_63_are_out_of_bounds_on_a_32_row_panel() {
        // The backing array is sized for 128x64; a 128x32 geometry must not
        // accept coordinates the array could technically hold.
        let mut fb = Framebuffer::new(128, 32);
        assert!(fb.set_pixel(0, 32, Color::On).is_err());
        assert!(fb.set_pixel(0, 63, Color::On).is_err());
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut fb = Framebuffer::new(128, 64);
        fb.set_pixel(1, 1, Color::On).unwrap();
        fb.set_pixel(100, 60, Color::On).unwrap();
        fb.clear();
        assert_eq!(checksum(&fb), 0);
    }

    #[test]
    fn as_bytes_covers_exactly_the_active_region() {
        let fb = Framebuffer::new(128, 32);
        assert_eq!(fb.as_bytes().len(), 512);
        let fb = Framebuffer::new(128, 64);
        assert_eq!(fb.as_bytes().len(), 1024);
    }
}
