//! SSD1306 command set and bus framing over I²C.

use super::frame::{FrameBuffer, PAGES, WIDTH};
use embedded_hal::i2c::I2c;

/// Control byte that marks the rest of an I²C write as a command stream.
pub const COMMAND_PREFIX: u8 = 0x00;

pub const SET_DISPLAY_OFF: u8 = 0xAE;
pub const SET_DISPLAY_ON: u8 = 0xAF;
pub const SET_MEMORY_MODE: u8 = 0x20;
pub const SET_COLUMN_ADDRESS: u8 = 0x21;
pub const SET_PAGE_ADDRESS: u8 = 0x22;
pub const SET_START_LINE: u8 = 0x40;
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_CHARGE_PUMP: u8 = 0x8D;
pub const SET_SEGMENT_REMAP: u8 = 0xA1;
pub const SET_ENTIRE_ON_RESUME: u8 = 0xA4;
pub const SET_NORMAL_DISPLAY: u8 = 0xA6;
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
pub const SET_COM_SCAN_REVERSED: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DESELECT: u8 = 0xDB;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Power-up sequence for a 128×64 panel with the internal charge pump.
pub const INIT_SEQUENCE: [u8; 26] = [
    SET_DISPLAY_OFF,
    SET_MEMORY_MODE,
    0x00, // horizontal addressing
    SET_START_LINE,
    SET_SEGMENT_REMAP,
    SET_MULTIPLEX_RATIO,
    (crate::display::frame::HEIGHT - 1) as u8,
    SET_COM_SCAN_REVERSED,
    SET_DISPLAY_OFFSET,
    0x00,
    SET_COM_PINS,
    0x12,
    SET_CLOCK_DIVIDE,
    0x80,
    SET_PRECHARGE,
    0xF1,
    SET_VCOM_DESELECT,
    0x30,
    SET_CONTRAST,
    0xFF,
    SET_ENTIRE_ON_RESUME,
    SET_NORMAL_DISPLAY,
    SET_CHARGE_PUMP,
    0x14,
    DEACTIVATE_SCROLL,
    SET_DISPLAY_ON,
];

/// Addressing header that selects the full column and page range.
pub const FULL_WINDOW: [u8; 7] = [
    COMMAND_PREFIX,
    SET_COLUMN_ADDRESS,
    0,
    (WIDTH - 1) as u8,
    SET_PAGE_ADDRESS,
    0,
    (PAGES - 1) as u8,
];

/// Register-level access to an SSD1306 on an I²C bus.
pub struct Ssd1306Bus<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ssd1306Bus<I2C> {
    /// Wraps `i2c` for the panel at 7-bit `address`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Sends the power-up sequence as one command stream.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let mut buf = [0u8; INIT_SEQUENCE.len() + 1];
        buf[0] = COMMAND_PREFIX;
        buf[1..].copy_from_slice(&INIT_SEQUENCE);
        self.i2c.write(self.address, &buf)
    }

    /// Sends the addressing header, then the whole frame in one data write.
    pub fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &FULL_WINDOW)?;
        self.i2c.write(self.address, frame.transfer())
    }
}
