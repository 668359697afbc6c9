//! Shared test infrastructure for turnstile-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as DigitalErrorType, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, I2c, Operation};
use turnstile_controller::{
    CycleDelay, Direction, JoystickAdc, ProtocolEngine, StateOutputs, SystemState, TimeDuration,
    TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source and Delay
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
    sleeps_ms: RefCell<Vec<u32>>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            sleeps_ms: RefCell::new(Vec::new()),
        }
    }

    /// Every millisecond delay taken through a `MockDelay`, in order
    pub fn sleeps_ms(&self) -> Vec<u32> {
        self.sleeps_ms.borrow().clone()
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

/// Blocking delay that moves the mock clock forward instead of sleeping
pub struct MockDelay<'a> {
    time: &'a MockTimeSource,
    pending_ns: u64,
}

impl<'a> MockDelay<'a> {
    pub fn new(time: &'a MockTimeSource) -> Self {
        Self {
            time,
            pending_ns: 0,
        }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.pending_ns += u64::from(ns);
        self.time.advance(self.pending_ns / 1_000_000);
        self.pending_ns %= 1_000_000;
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us.saturating_mul(1000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.time.sleeps_ms.borrow_mut().push(ms);
        self.time.advance(u64::from(ms));
    }
}

// ============================================================================
// Mock Joystick
// ============================================================================

/// Raw channel values shared between a test and its `MockJoystick`
pub struct JoystickInput {
    channel_a: Cell<u16>,
    channel_b: Cell<u16>,
    reads: Cell<u32>,
}

impl JoystickInput {
    pub fn new() -> Self {
        Self {
            channel_a: Cell::new(2048),
            channel_b: Cell::new(2048),
            reads: Cell::new(0),
        }
    }

    pub fn set_raw(&self, channel_a: u16, channel_b: u16) {
        self.channel_a.set(channel_a);
        self.channel_b.set(channel_b);
    }

    pub fn center(&self) {
        self.set_raw(2048, 2048);
    }

    /// Deflect the stick fully in `direction`
    pub fn push(&self, direction: Direction) {
        match direction {
            Direction::None => self.center(),
            Direction::Right => self.set_raw(2048, 4095),
            Direction::Left => self.set_raw(2048, 0),
            Direction::Down => self.set_raw(0, 2048),
            Direction::Up => self.set_raw(4095, 2048),
        }
    }

    /// Number of channel conversions performed so far
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

pub struct MockJoystick<'a> {
    input: &'a JoystickInput,
}

impl<'a> MockJoystick<'a> {
    pub fn new(input: &'a JoystickInput) -> Self {
        Self { input }
    }
}

impl JoystickAdc for MockJoystick<'_> {
    fn read_channel_a(&mut self) -> u16 {
        self.input.reads.set(self.input.reads.get() + 1);
        self.input.channel_a.get()
    }

    fn read_channel_b(&mut self) -> u16 {
        self.input.reads.set(self.input.reads.get() + 1);
        self.input.channel_b.get()
    }
}

// ============================================================================
// Mock Protocol Engine
// ============================================================================

/// Protocol engine that records the byte stream
#[derive(Default)]
pub struct RecordingEngine {
    pub bytes: Vec<u8>,
    pub frames: usize,
    /// Length of every frame handed over through `write_frame`
    pub frame_lengths: Vec<usize>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the most recent complete frame
    pub fn last_frame(&self, frame_len: usize) -> &[u8] {
        &self.bytes[self.bytes.len() - frame_len..]
    }
}

impl ProtocolEngine for RecordingEngine {
    fn put_blocking(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }

    fn write_frame<B: IntoIterator<Item = u8>>(&mut self, bytes: B) {
        let start = self.bytes.len();
        self.bytes.extend(bytes);
        self.frame_lengths.push(self.bytes.len() - start);
        self.end_frame();
    }
}

// ============================================================================
// Mock Pins and Signal Log
// ============================================================================

/// Output pin that mirrors its level into a shared cell
pub struct MockPin<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockPin<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl DigitalErrorType for MockPin<'_> {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// One event on a bit-banged line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    High,
    Low,
    Wait(u32),
}

/// Pin that appends every level change to a shared log
pub struct LoggedPin<'a> {
    log: &'a RefCell<Vec<Signal>>,
}

impl<'a> LoggedPin<'a> {
    pub fn new(log: &'a RefCell<Vec<Signal>>) -> Self {
        Self { log }
    }
}

impl DigitalErrorType for LoggedPin<'_> {
    type Error = core::convert::Infallible;
}

impl OutputPin for LoggedPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Signal::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Signal::High);
        Ok(())
    }
}

/// Cycle delay that appends every wait to the same log as `LoggedPin`
pub struct LoggedDelay<'a> {
    log: &'a RefCell<Vec<Signal>>,
}

impl<'a> LoggedDelay<'a> {
    pub fn new(log: &'a RefCell<Vec<Signal>>) -> Self {
        Self { log }
    }
}

impl CycleDelay for LoggedDelay<'_> {
    fn delay_cycles(&mut self, cycles: u32) {
        self.log.borrow_mut().push(Signal::Wait(cycles));
    }
}

// ============================================================================
// Mock I2C Bus
// ============================================================================

/// I2C bus that records every write as `(address, bytes)`
pub struct MockI2c<'a> {
    writes: &'a RefCell<Vec<(u8, Vec<u8>)>>,
    fail: bool,
}

impl<'a> MockI2c<'a> {
    pub fn new(writes: &'a RefCell<Vec<(u8, Vec<u8>)>>) -> Self {
        Self { writes, fail: false }
    }

    /// A bus on which every transaction fails
    pub fn failing(writes: &'a RefCell<Vec<(u8, Vec<u8>)>>) -> Self {
        Self { writes, fail: true }
    }
}

impl I2cErrorType for MockI2c<'_> {
    type Error = ErrorKind;
}

impl I2c for MockI2c<'_> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }

        for operation in operations.iter_mut() {
            if let Operation::Write(bytes) = operation {
                self.writes.borrow_mut().push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Counting Outputs
// ============================================================================

/// Outputs that remember every state they were asked to show
#[derive(Default)]
pub struct CountingOutputs {
    pub starts: usize,
    pub refreshes: Vec<SystemState>,
}

impl CountingOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.len()
    }
}

impl StateOutputs for CountingOutputs {
    fn start(&mut self) {
        self.starts += 1;
    }

    fn refresh(&mut self, state: &SystemState) {
        self.refreshes.push(*state);
    }
}
