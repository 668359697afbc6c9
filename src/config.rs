//! Controller constants and timing configuration.
//!
//! Pin assignments, protocol constants and loop timing live here so they can
//! be tuned in one place.

use palette::Srgb;

// Loop timing

/// Delay at the end of every control loop iteration (ms).
pub const TICK_MS: u32 = 10;

/// Delay after every accepted menu edit (ms).
pub const SETTLE_MS: u32 = 150;

// Joystick

/// Midpoint of the 12-bit ADC range.
pub const ADC_MIDPOINT: i32 = 2048;

/// Divisor that maps a centered ADC reading to roughly `-100..=100`.
pub const AXIS_SCALE: i32 = 20;

/// Minimum axis deflection (after scaling) that counts as a direction.
pub const DIRECTION_THRESHOLD: i16 = 50;

/// Minimum time between two sampled joystick reads (ms).
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

// Addressable LED matrix

/// Number of pixels in the matrix.
pub const PIXEL_COUNT: usize = 25;

/// Matrix indices of the GR, HO, DI and PT indicators, in toggle order.
pub const STATUS_PIXELS: [usize; 4] = [4, 3, 2, 1];

/// Indicator colour for a toggle that currently allows passage.
pub const PIXEL_ALLOW: Srgb<u8> = Srgb::new(0, 255, 0);

/// Indicator colour for a toggle that currently blocks passage.
pub const PIXEL_DENY: Srgb<u8> = Srgb::new(255, 0, 0);

// Display

/// 7-bit I²C address of the SSD1306.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// Display bus clock (Hz).
pub const DISPLAY_I2C_FREQ_HZ: u32 = 400_000;

// GPIO pin assignments (BitDogLab / Raspberry Pi Pico)
//
//   Joystick VRx (ADC1) → GPIO27   logical X
//   Joystick VRy (ADC0) → GPIO26   logical Y
//   LED matrix DIN      → GPIO7
//   Status LED R/G/B    → GPIO13 / GPIO11 / GPIO12
//   OLED SDA / SCL      → GPIO14 / GPIO15 (I2C1)

/// Runtime-tunable timing of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Delay at the end of every iteration (ms).
    pub tick_ms: u32,
    /// Delay after every accepted menu edit (ms).
    pub settle_ms: u32,
    /// Joystick debounce window (ms).
    pub debounce_ms: u64,
    /// Scaled axis threshold for a direction.
    pub threshold: i16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            settle_ms: SETTLE_MS,
            debounce_ms: DEBOUNCE_WINDOW_MS,
            threshold: DIRECTION_THRESHOLD,
        }
    }
}
