//! The three output devices, refreshed together.

use crate::display::TextDisplay;
use crate::pixels::PixelStrip;
use crate::state::SystemState;
use crate::status_led::StatusLed;
use crate::ws2812::ProtocolEngine;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

/// Trait for whatever mirrors [`SystemState`] to the outside world.
///
/// The controller only calls [`refresh`](Self::refresh) when the state has
/// changed, and every call must update every device.
pub trait StateOutputs {
    /// Brings the outputs up at power-on, before the first refresh.
    fn start(&mut self) {}

    /// Redraws every device from `state`.
    fn refresh(&mut self, state: &SystemState);
}

/// Status LED, text display and LED matrix.
pub struct OutputBank<R, G, B, I2C, E>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    I2C: I2c,
    E: ProtocolEngine,
{
    pub status_led: StatusLed<R, G, B>,
    pub display: TextDisplay<I2C>,
    pub matrix: PixelStrip<E>,
}

impl<R, G, B, I2C, E> OutputBank<R, G, B, I2C, E>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    I2C: I2c,
    E: ProtocolEngine,
{
    pub fn new(
        status_led: StatusLed<R, G, B>,
        display: TextDisplay<I2C>,
        matrix: PixelStrip<E>,
    ) -> Self {
        Self {
            status_led,
            display,
            matrix,
        }
    }
}

impl<R, G, B, I2C, E> StateOutputs for OutputBank<R, G, B, I2C, E>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    I2C: I2c,
    E: ProtocolEngine,
{
    /// Initializes the panel and blanks the matrix.
    fn start(&mut self) {
        self.display.init();
        self.matrix.clear();
        self.matrix.flush();
    }

    fn refresh(&mut self, state: &SystemState) {
        self.status_led.show(state.gate_open);
        self.display.render(state);
        self.matrix.show_permissions(&state.permissions);
    }
}
