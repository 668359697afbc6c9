//! One-wire protocol for WS2812-family addressable LEDs.
//!
//! Each byte is sent MSB first as eight high/low pulse pairs whose widths
//! encode the bit value. A frame ends when the line stays low for at least
//! [`LATCH_US`]. There is no acknowledgement and no resynchronization: a lost
//! byte shifts every later colour in the same frame.
//!
//! The transmitter that shifts bytes out is a [`ProtocolEngine`]. Engines are
//! a finite hardware resource, so they are claimed from an [`EngineBank`] at
//! start-up and failing to claim one is fatal.

use crate::error::InitError;
use embedded_hal::digital::OutputPin;

/// High time of a `0` bit (ns).
pub const T0H_NS: u32 = 400;
/// Low time of a `0` bit (ns).
pub const T0L_NS: u32 = 850;
/// High time of a `1` bit (ns).
pub const T1H_NS: u32 = 800;
/// Low time of a `1` bit (ns).
pub const T1L_NS: u32 = 450;
/// Minimum low time that latches a frame (µs).
pub const LATCH_US: u32 = 300;

/// Something that can push bytes onto the one-wire line.
pub trait ProtocolEngine {
    /// Transmits one byte, blocking until the hardware has accepted it.
    fn put_blocking(&mut self, byte: u8);

    /// Called once after the last byte of a frame.
    fn end_frame(&mut self) {}

    /// Transmits one whole frame and latches it.
    ///
    /// Engines that must not be preempted mid-frame override this to guard
    /// every byte of the frame at once.
    fn write_frame<B: IntoIterator<Item = u8>>(&mut self, bytes: B) {
        for byte in bytes {
            self.put_blocking(byte);
        }
        self.end_frame();
    }
}

/// A pool of protocol engines that can be claimed once each.
pub trait EngineBank {
    type Engine: ProtocolEngine;

    /// Takes an unused engine out of the bank.
    fn claim_unused(&mut self) -> Option<Self::Engine>;
}

impl<E: ProtocolEngine> EngineBank for Option<E> {
    type Engine = E;

    fn claim_unused(&mut self) -> Option<E> {
        self.take()
    }
}

/// Claims an engine from `primary`, falling back to `fallback`.
///
/// Returns [`InitError::NoProtocolEngine`] when both banks are exhausted.
/// Callers are expected to halt on this error.
pub fn claim_engine<E, P, F>(primary: &mut P, fallback: &mut F) -> Result<E, InitError>
where
    E: ProtocolEngine,
    P: EngineBank<Engine = E>,
    F: EngineBank<Engine = E>,
{
    if let Some(engine) = primary.claim_unused() {
        return Ok(engine);
    }

    debug!("primary engine bank exhausted, trying fallback");
    fallback.claim_unused().ok_or(InitError::NoProtocolEngine)
}

/// Busy-wait measured in CPU cycles.
pub trait CycleDelay {
    /// Spins for at least `cycles` CPU cycles.
    fn delay_cycles(&mut self, cycles: u32);
}

/// Pulse widths converted to CPU cycles for a given core clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTiming {
    pub t0h: u32,
    pub t0l: u32,
    pub t1h: u32,
    pub t1l: u32,
    pub latch: u32,
}

impl BitTiming {
    /// Converts the protocol timing table for a core running at `clock_hz`.
    ///
    /// Every pulse is at least one cycle long.
    pub fn for_clock(clock_hz: u32) -> Self {
        let cycles = |ns: u32| -> u32 {
            let c = u64::from(ns) * u64::from(clock_hz) / 1_000_000_000;
            (c as u32).max(1)
        };

        Self {
            t0h: cycles(T0H_NS),
            t0l: cycles(T0L_NS),
            t1h: cycles(T1H_NS),
            t1l: cycles(T1L_NS),
            latch: cycles(LATCH_US * 1000),
        }
    }

    /// High and low cycle counts for one bit.
    #[inline]
    pub fn pulse(&self, bit: bool) -> (u32, u32) {
        if bit {
            (self.t1h, self.t1l)
        } else {
            (self.t0h, self.t0l)
        }
    }
}

/// A protocol engine that toggles a GPIO pin directly.
///
/// Timing comes entirely from `delay`; the caller must make sure nothing
/// preempts a frame in flight.
pub struct BitBangEngine<P: OutputPin, C: CycleDelay> {
    pin: P,
    delay: C,
    timing: BitTiming,
}

impl<P: OutputPin, C: CycleDelay> BitBangEngine<P, C> {
    /// Creates an engine and drives the line low.
    pub fn new(mut pin: P, delay: C, timing: BitTiming) -> Self {
        let _ = pin.set_low();
        Self { pin, delay, timing }
    }
}

impl<P: OutputPin, C: CycleDelay> ProtocolEngine for BitBangEngine<P, C> {
    fn put_blocking(&mut self, byte: u8) {
        for shift in (0..8).rev() {
            let (high, low) = self.timing.pulse(byte & (1 << shift) != 0);
            let _ = self.pin.set_high();
            self.delay.delay_cycles(high);
            let _ = self.pin.set_low();
            self.delay.delay_cycles(low);
        }
    }

    fn end_frame(&mut self) {
        let _ = self.pin.set_low();
        self.delay.delay_cycles(self.timing.latch);
    }
}
