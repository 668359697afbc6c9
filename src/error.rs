//! Initialization errors.
//!
//! The controller has no runtime error path. Bus and pin failures are
//! discarded, out-of-range pixel writes are ignored, and the only reportable
//! condition is a missing protocol engine at start-up.

/// Errors that can occur while bringing up the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Every protocol engine in both banks is already claimed.
    NoProtocolEngine,
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InitError::NoProtocolEngine => {
                write!(f, "no unused protocol engine available for the LED strip")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InitError {}
