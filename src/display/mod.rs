//! Status screen on a page-addressed SSD1306 OLED.
//!
//! Every refresh blanks the frame buffer, rasterizes the whole layout and
//! pushes it in one bulk transfer. There are no partial updates.

pub mod frame;
pub mod layout;
pub mod ssd1306;

pub use frame::FrameBuffer;
pub use ssd1306::Ssd1306Bus;

use crate::state::SystemState;
use embedded_hal::i2c::I2c;

/// Frame buffer plus the bus it is pushed over.
pub struct TextDisplay<I2C: I2c> {
    bus: Ssd1306Bus<I2C>,
    frame: FrameBuffer,
}

impl<I2C: I2c> TextDisplay<I2C> {
    /// Wraps the bus. The panel is not touched until [`init`](Self::init).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            bus: Ssd1306Bus::new(i2c, address),
            frame: FrameBuffer::new(),
        }
    }

    /// Powers the panel up and blanks it. Bus errors are logged and ignored.
    pub fn init(&mut self) {
        if self.bus.init().is_err() {
            warn!("display: init sequence not acknowledged");
        }
        self.frame.clear();
        self.push();
    }

    /// Redraws the full screen for `state`.
    pub fn render(&mut self, state: &SystemState) {
        layout::draw(&mut self.frame, state);
        self.push();
    }

    /// The last rendered frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    fn push(&mut self) {
        if self.bus.write_frame(&self.frame).is_err() {
            warn!("display: frame write failed");
        }
    }
}
