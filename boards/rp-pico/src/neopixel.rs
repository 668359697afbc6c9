//! Bit-banged WS2812 line for the 5x5 matrix.

use turnstile_controller::{CycleDelay, ProtocolEngine};

/// Busy-wait on the core's instruction counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinDelay;

impl CycleDelay for SpinDelay {
    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}

/// Runs an inner engine with interrupts masked.
///
/// Pulse widths are a few hundred nanoseconds and a gap longer than the latch
/// time ends the frame early, so a whole frame is sent inside one critical
/// section. The latch itself runs with interrupts enabled.
pub struct CriticalSectionEngine<E> {
    inner: E,
}

impl<E: ProtocolEngine> CriticalSectionEngine<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: ProtocolEngine> ProtocolEngine for CriticalSectionEngine<E> {
    fn put_blocking(&mut self, byte: u8) {
        cortex_m::interrupt::free(|_| self.inner.put_blocking(byte));
    }

    fn end_frame(&mut self) {
        self.inner.end_frame();
    }

    fn write_frame<B: IntoIterator<Item = u8>>(&mut self, bytes: B) {
        let inner = &mut self.inner;
        cortex_m::interrupt::free(|_| {
            for byte in bytes {
                inner.put_blocking(byte);
            }
        });
        self.inner.end_frame();
    }
}
