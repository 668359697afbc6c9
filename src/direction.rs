//! Joystick direction decoding with a time-based debounce gate.

use crate::joystick::{AxisSample, JoystickAdc};
use crate::time::{TimeDuration, TimeInstant};

/// A discrete joystick command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Stick centered, or the read was suppressed by the debounce window.
    None,
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Classifies a scaled sample against `threshold`.
    ///
    /// The X axis is checked before the Y axis and the positive side before
    /// the negative side, so a diagonal always reports its X component.
    pub fn classify(sample: AxisSample, threshold: i16) -> Self {
        if sample.x > threshold {
            Direction::Right
        } else if sample.x < -threshold {
            Direction::Left
        } else if sample.y > threshold {
            Direction::Down
        } else if sample.y < -threshold {
            Direction::Up
        } else {
            Direction::None
        }
    }
}

/// Turns the continuous joystick stream into discrete [`Direction`] events.
///
/// Reads are suppressed for `window` after the last quiet read. The quiet
/// timestamp only moves when a sampled read comes back [`Direction::None`];
/// accepted directions leave it untouched, so a held stick keeps reporting
/// its direction once the window has passed.
pub struct DirectionDecoder<I: TimeInstant> {
    last_quiet: I,
    window: I::Duration,
    threshold: i16,
}

impl<I: TimeInstant> DirectionDecoder<I> {
    /// Creates a decoder whose debounce window starts at `now`.
    pub fn new(now: I, window_ms: u64, threshold: i16) -> Self {
        Self {
            last_quiet: now,
            window: I::Duration::from_millis(window_ms),
            threshold,
        }
    }

    /// Samples the joystick unless suppressed and returns the decoded direction.
    pub fn poll<J: JoystickAdc>(&mut self, adc: &mut J, now: I) -> Direction {
        if now.duration_since(self.last_quiet).as_millis() < self.window.as_millis() {
            return Direction::None;
        }

        let sample = AxisSample::read(adc);
        let direction = Direction::classify(sample, self.threshold);

        if direction == Direction::None {
            self.last_quiet = now;
        }

        direction
    }

    /// Instant of the last sampled read that found the stick centered.
    pub fn last_quiet(&self) -> I {
        self.last_quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i16 = 50;

    fn at(x: i16, y: i16) -> AxisSample {
        AxisSample { x, y }
    }

    #[test]
    fn classify_single_axes() {
        assert_eq!(Direction::classify(at(51, 0), T), Direction::Right);
        assert_eq!(Direction::classify(at(-51, 0), T), Direction::Left);
        assert_eq!(Direction::classify(at(0, 51), T), Direction::Down);
        assert_eq!(Direction::classify(at(0, -51), T), Direction::Up);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(Direction::classify(at(50, 0), T), Direction::None);
        assert_eq!(Direction::classify(at(-50, -50), T), Direction::None);
        assert_eq!(Direction::classify(at(0, 0), T), Direction::None);
    }

    #[test]
    fn diagonals_report_the_x_axis() {
        assert_eq!(Direction::classify(at(80, 80), T), Direction::Right);
        assert_eq!(Direction::classify(at(80, -80), T), Direction::Right);
        assert_eq!(Direction::classify(at(-80, 80), T), Direction::Left);
        assert_eq!(Direction::classify(at(-80, -80), T), Direction::Left);
    }
}
