//! Joystick sampling on the RP2040 ADC.
//!
//! Channel A is ADC0 (GPIO26, vertical axis) and channel B is ADC1
//! (GPIO27, horizontal axis). Conversions are 12-bit.

use embedded_hal_0_2::adc::OneShot;
use rp_pico::hal::Adc;
use turnstile_controller::JoystickAdc;
use turnstile_controller::config::ADC_MIDPOINT;

const CENTRE: u16 = ADC_MIDPOINT as u16;

/// Two-channel joystick read through the one-shot ADC interface.
///
/// A conversion that is not ready reads as centred, which the decoder treats
/// as a quiet sample.
pub struct AdcJoystick<A, B> {
    adc: Adc,
    channel_a: A,
    channel_b: B,
}

impl<A, B> AdcJoystick<A, B> {
    pub fn new(adc: Adc, channel_a: A, channel_b: B) -> Self {
        Self {
            adc,
            channel_a,
            channel_b,
        }
    }
}

impl<A, B> JoystickAdc for AdcJoystick<A, B>
where
    Adc: OneShot<Adc, u16, A> + OneShot<Adc, u16, B>,
{
    fn read_channel_a(&mut self) -> u16 {
        <Adc as OneShot<Adc, u16, A>>::read(&mut self.adc, &mut self.channel_a)
            .unwrap_or(CENTRE)
    }

    fn read_channel_b(&mut self) -> u16 {
        <Adc as OneShot<Adc, u16, B>>::read(&mut self.adc, &mut self.channel_b)
            .unwrap_or(CENTRE)
    }
}
