//! Analog joystick sampling.
//!
//! The two potentiometers of the joystick are wired crossed relative to their
//! logical meaning: channel B carries the logical X axis and channel A the
//! logical Y axis, with Y reading inverted. [`AxisSample::from_raw`] undoes
//! the wiring and scales both axes to a small signed range.

use crate::config::{ADC_MIDPOINT, AXIS_SCALE};

/// Trait for abstracting the two ADC channels behind the joystick.
///
/// Implementations return raw unsigned samples in the converter's full-scale
/// range (0..=4095 for a 12-bit ADC). Conversion failures must be handled
/// internally; this trait cannot fail.
pub trait JoystickAdc {
    /// Samples channel A (logical Y axis, inverted).
    fn read_channel_a(&mut self) -> u16;

    /// Samples channel B (logical X axis).
    fn read_channel_b(&mut self) -> u16;
}

/// A centered, scaled joystick position.
///
/// Both axes land roughly in `-100..=100`. Positive `x` is right, positive
/// `y` is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub x: i16,
    pub y: i16,
}

impl AxisSample {
    /// Converts a pair of raw channel readings into a logical position.
    ///
    /// Division truncates toward zero. Out-of-range raw values are scaled
    /// as-is, never clamped.
    pub fn from_raw(channel_a: u16, channel_b: u16) -> Self {
        let x = (i32::from(channel_b) - ADC_MIDPOINT) / AXIS_SCALE;
        let y = -((i32::from(channel_a) - ADC_MIDPOINT) / AXIS_SCALE);

        Self {
            x: x as i16,
            y: y as i16,
        }
    }

    /// Reads both channels, logical X first, and converts them.
    pub fn read<J: JoystickAdc>(adc: &mut J) -> Self {
        let channel_b = adc.read_channel_b();
        let channel_a = adc.read_channel_a();
        Self::from_raw(channel_a, channel_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_centered() {
        assert_eq!(AxisSample::from_raw(2048, 2048), AxisSample { x: 0, y: 0 });
    }

    #[test]
    fn axes_are_swapped_and_y_is_inverted() {
        // Channel B high pushes logical X right; channel A high pushes Y up.
        let sample = AxisSample::from_raw(4095, 4095);
        assert_eq!(sample.x, 102);
        assert_eq!(sample.y, -102);

        let sample = AxisSample::from_raw(0, 0);
        assert_eq!(sample.x, -102);
        assert_eq!(sample.y, 102);
    }

    #[test]
    fn division_truncates_toward_zero() {
        // 2048 + 39 -> 39 / 20 = 1; 2048 - 39 -> -39 / 20 = -1
        assert_eq!(AxisSample::from_raw(2048, 2087).x, 1);
        assert_eq!(AxisSample::from_raw(2048, 2009).x, -1);
        assert_eq!(AxisSample::from_raw(2087, 2048).y, -1);
    }
}
