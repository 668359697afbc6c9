//! The control loop that ties input, state and outputs together.
//!
//! Provides [`Controller`], a single-owner state holder that runs one
//! cooperative loop: decode the joystick, apply the event to the menu,
//! recompute the gate and refresh every output when anything changed.

use crate::change::SnapshotTracker;
use crate::config::ControllerConfig;
use crate::direction::{Direction, DirectionDecoder};
use crate::joystick::JoystickAdc;
use crate::outputs::StateOutputs;
use crate::state::SystemState;
use crate::time::{TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;

/// What happened during one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// Decoded joystick direction.
    pub direction: Direction,
    /// The direction was applied to the menu and the settle delay ran.
    pub accepted: bool,
    /// The outputs were refreshed.
    pub refreshed: bool,
}

/// Runs the turnstile.
///
/// The controller is the only writer of [`SystemState`] and of the
/// synchronized snapshot. Every delay is a blocking wait on `D`.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `J` - Joystick ADC implementation type
/// * `D` - Blocking delay implementation type
/// * `O` - Output devices
pub struct Controller<'t, I, T, J, D, O>
where
    I: TimeInstant,
    T: TimeSource<I>,
    J: JoystickAdc,
    D: DelayNs,
    O: StateOutputs,
{
    time_source: &'t T,
    joystick: J,
    delay: D,
    outputs: O,
    decoder: DirectionDecoder<I>,
    state: SystemState,
    snapshot: SnapshotTracker,
    config: ControllerConfig,
}

impl<'t, I, T, J, D, O> Controller<'t, I, T, J, D, O>
where
    I: TimeInstant,
    T: TimeSource<I>,
    J: JoystickAdc,
    D: DelayNs,
    O: StateOutputs,
{
    /// Creates a controller with the default timing.
    pub fn new(joystick: J, delay: D, outputs: O, time_source: &'t T) -> Self {
        Self::with_config(joystick, delay, outputs, time_source, ControllerConfig::default())
    }

    /// Creates a controller with custom timing.
    ///
    /// The debounce window starts now, so joystick reads are suppressed for
    /// the first `config.debounce_ms`.
    pub fn with_config(
        joystick: J,
        delay: D,
        outputs: O,
        time_source: &'t T,
        config: ControllerConfig,
    ) -> Self {
        let decoder = DirectionDecoder::new(time_source.now(), config.debounce_ms, config.threshold);

        Self {
            time_source,
            joystick,
            delay,
            outputs,
            decoder,
            state: SystemState::new(),
            snapshot: SnapshotTracker::new(),
            config,
        }
    }

    /// Brings the outputs up and shows the power-on state.
    ///
    /// Commits the snapshot, so the first [`step`](Self::step) only refreshes
    /// if the joystick changed something.
    pub fn start(&mut self) {
        self.outputs.start();
        self.state.recompute_gate();
        self.synchronize();
        info!("controller started, gate open: {}", self.state.gate_open);
    }

    /// Runs one loop iteration, including the trailing tick delay.
    pub fn step(&mut self) -> StepReport {
        let now = self.time_source.now();
        let direction = self.decoder.poll(&mut self.joystick, now);

        let accepted = self.state.apply(direction);
        if accepted {
            self.delay.delay_ms(self.config.settle_ms);
        }

        self.state.recompute_gate();

        let refreshed = self.snapshot.has_changed(&self.state);
        if refreshed {
            self.synchronize();
        }

        self.delay.delay_ms(self.config.tick_ms);

        StepReport {
            direction,
            accepted,
            refreshed,
        }
    }

    /// Starts the outputs and loops forever.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    /// Current state.
    pub fn state(&self) -> &SystemState {
        &self.state
    }

    /// State the outputs currently show, if they have been synchronized.
    pub fn synchronized_state(&self) -> Option<&SystemState> {
        self.snapshot.snapshot()
    }

    /// Active timing configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Shared access to the output devices.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    fn synchronize(&mut self) {
        debug!("refreshing outputs: {}", self.state);
        self.outputs.refresh(&self.state);
        self.snapshot.commit(&self.state);
    }
}
