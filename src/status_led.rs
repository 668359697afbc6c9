//! Two-colour gate indicator on discrete GPIO lines.

use embedded_hal::digital::OutputPin;

/// Red/green status LED for the gate decision.
///
/// The blue line of the RGB part is held low permanently. Pin errors are
/// discarded.
pub struct StatusLed<R: OutputPin, G: OutputPin, B: OutputPin> {
    red: R,
    green: G,
    blue: B,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> StatusLed<R, G, B> {
    /// Takes the three lines and drives all of them low.
    pub fn new(mut red: R, mut green: G, mut blue: B) -> Self {
        let _ = red.set_low();
        let _ = green.set_low();
        let _ = blue.set_low();
        Self { red, green, blue }
    }

    /// Green when open, red when closed. Never both.
    pub fn show(&mut self, gate_open: bool) {
        let _ = self.red.set_state((!gate_open).into());
        let _ = self.green.set_state(gate_open.into());
        let _ = self.blue.set_low();
    }
}
