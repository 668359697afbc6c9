#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SystemState`**: Permission flags, menu cursor and the cached gate decision
//! - **`Permissions`**: The GR, HO, DI and PT flags plus the gate decision function
//! - **`DirectionDecoder`**: Turns the analog joystick into debounced menu commands
//! - **`SnapshotTracker`**: Detects changes against the last synchronized state
//! - **`PixelStrip`**: Addressable LED buffer pushed over a `ProtocolEngine`
//! - **`StatusLed`**: Red/green gate indicator
//! - **`TextDisplay`**: Page-addressed OLED status screen
//! - **`Controller`**: The single cooperative control loop
//! - **`JoystickAdc`**, **`TimeSource`**, **`ProtocolEngine`**: Traits to implement for your board
//!
//! Digital outputs, delays and the display bus use the `embedded-hal` 1.0 traits.

#[macro_use]
mod fmt;

pub mod time;
pub mod config;
pub mod error;
pub mod joystick;
pub mod direction;
pub mod state;
pub mod change;
pub mod ws2812;
pub mod pixels;
pub mod status_led;
pub mod display;
pub mod outputs;
pub mod controller;

pub use change::{SnapshotTracker, state_changed};
pub use config::ControllerConfig;
pub use controller::{Controller, StepReport};
pub use direction::{Direction, DirectionDecoder};
pub use display::{FrameBuffer, TextDisplay};
pub use error::InitError;
pub use joystick::{AxisSample, JoystickAdc};
pub use outputs::{OutputBank, StateOutputs};
pub use pixels::{Pixel, PixelStrip};
pub use state::{Cursor, Permissions, SystemState, ToggleLine};
pub use status_led::StatusLed;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use ws2812::{BitBangEngine, BitTiming, CycleDelay, EngineBank, ProtocolEngine, claim_engine};
