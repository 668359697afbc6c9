//! Addressable LED matrix driver.
//!
//! [`PixelStrip`] owns an in-memory pixel buffer that is pushed to the
//! physical LEDs with [`flush`](PixelStrip::flush). Colours are stored as
//! `Srgb<u8>` and transmitted in the Green, Red, Blue byte order the
//! WS2812 family expects.

use crate::config::{PIXEL_ALLOW, PIXEL_COUNT, PIXEL_DENY, STATUS_PIXELS};
use crate::state::{Permissions, ToggleLine};
use crate::ws2812::ProtocolEngine;
use palette::Srgb;

/// One pixel of the buffer.
pub type Pixel = Srgb<u8>;

/// All channels off.
pub const PIXEL_OFF: Pixel = Srgb::new(0, 0, 0);

/// Fixed-size pixel buffer bound to a protocol engine.
///
/// # Type Parameters
/// * `E` - Protocol engine that shifts bytes onto the line
/// * `N` - Number of pixels on the strip
pub struct PixelStrip<E: ProtocolEngine, const N: usize = PIXEL_COUNT> {
    engine: E,
    pixels: [Pixel; N],
}

impl<E: ProtocolEngine, const N: usize> PixelStrip<E, N> {
    /// Creates a strip with every pixel off. Nothing is transmitted.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            pixels: [PIXEL_OFF; N],
        }
    }

    /// Sets pixel `index`. Writes past the end of the strip are ignored.
    pub fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = Srgb::new(red, green, blue);
        }
    }

    /// Sets pixel `index` from a colour value. Out-of-range writes are ignored.
    #[inline]
    pub fn set_color(&mut self, index: usize, color: Pixel) {
        self.set_pixel(index, color.red, color.green, color.blue);
    }

    /// Returns pixel `index`, or `None` when out of range.
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// Turns every pixel off in the buffer.
    pub fn clear(&mut self) {
        self.pixels.fill(PIXEL_OFF);
    }

    /// The whole buffer in strip order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Transmits the buffer: `3 × N` bytes, GRB per pixel, pixel 0 first.
    ///
    /// The whole buffer goes to the engine as a single frame.
    pub fn flush(&mut self) {
        let bytes = self
            .pixels
            .iter()
            .flat_map(|pixel| [pixel.green, pixel.red, pixel.blue]);
        self.engine.write_frame(bytes);
    }

    /// Shows one indicator per toggle line and flushes.
    ///
    /// Indicators sit at [`STATUS_PIXELS`]; each is green while its line
    /// reads ON and red otherwise. Other pixels keep their contents.
    pub fn show_permissions(&mut self, permissions: &Permissions) {
        for (line, &index) in ToggleLine::ALL.iter().zip(STATUS_PIXELS.iter()) {
            let color = if permissions.is_on(*line) {
                PIXEL_ALLOW
            } else {
                PIXEL_DENY
            };
            self.set_color(index, color);
        }

        self.flush();
    }

    /// Shared access to the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Releases the engine.
    pub fn release(self) -> E {
        self.engine
    }
}
