//! Page-organized monochrome frame buffer.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Size};

/// Display width in pixels.
pub const WIDTH: usize = 128;

/// Display height in pixels.
pub const HEIGHT: usize = 64;

/// Rows per page.
pub const PAGE_HEIGHT: usize = 8;

/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / PAGE_HEIGHT;

/// Size of the bitmap in bytes.
pub const FRAME_LEN: usize = WIDTH * PAGES;

/// Control byte that marks the rest of an I²C write as display data.
pub(crate) const DATA_PREFIX: u8 = 0x40;

/// A 128×64 bitmap laid out the way the controller's RAM is addressed.
///
/// Byte `page * WIDTH + x` holds column `x` of page `page`; bit 0 is the top
/// row of the page. The buffer keeps one extra leading byte so the whole
/// frame can go out as a single bus write without copying.
pub struct FrameBuffer {
    raw: [u8; FRAME_LEN + 1],
}

impl FrameBuffer {
    /// Creates a blank frame.
    pub const fn new() -> Self {
        let mut raw = [0u8; FRAME_LEN + 1];
        raw[0] = DATA_PREFIX;
        Self { raw }
    }

    /// Blanks every pixel.
    pub fn clear(&mut self) {
        self.raw[1..].fill(0);
    }

    /// Sets or clears one pixel. Coordinates outside the display are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some(index) = Self::locate(x, y) else {
            return;
        };
        let mask = 1u8 << (y as usize % PAGE_HEIGHT);

        if on {
            self.raw[index] |= mask;
        } else {
            self.raw[index] &= !mask;
        }
    }

    /// Reads one pixel. Coordinates outside the display read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some(index) => self.raw[index] & (1u8 << (y as usize % PAGE_HEIGHT)) != 0,
            None => false,
        }
    }

    /// The 128 column bytes of `page`.
    ///
    /// # Panics
    /// Panics if `page >= PAGES`.
    pub fn page(&self, page: usize) -> &[u8] {
        let start = 1 + page * WIDTH;
        &self.raw[start..start + WIDTH]
    }

    /// The bitmap without the bus prefix.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw[1..]
    }

    /// The bitmap with the data control byte in front, ready for the bus.
    pub(crate) fn transfer(&self) -> &[u8] {
        &self.raw
    }

    fn locate(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        Some(1 + (y as usize / PAGE_HEIGHT) * WIDTH + x as usize)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_map_to_page_bits() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(3, 9, true);

        assert_eq!(frame.page(1)[3], 0b0000_0010);
        assert!(frame.pixel(3, 9));
        assert_eq!(frame.as_bytes().iter().filter(|b| **b != 0).count(), 1);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(-1, 0, true);
        frame.set_pixel(128, 0, true);
        frame.set_pixel(0, 64, true);
        assert!(frame.as_bytes().iter().all(|b| *b == 0));
        assert!(!frame.pixel(500, 500));
    }

    #[test]
    fn clear_keeps_the_data_prefix() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, true);
        frame.clear();
        assert_eq!(frame.transfer()[0], DATA_PREFIX);
        assert_eq!(frame.transfer().len(), FRAME_LEN + 1);
        assert!(!frame.pixel(0, 0));
    }
}
