// src/common/error.rs

use super::{status, types::RunState};
use core::fmt::Debug;

/// Errors reported by the ranging driver.
///
/// `E` is the error type of the trigger/echo interface, `S` the error type of
/// the indicator outputs. Both default to `()` for code paths that never touch
/// hardware.
#[derive(Debug, thiserror::Error)]
pub enum SonarError<E = (), S = ()>
where
    E: Debug,
    S: Debug,
{
    /// Underlying I/O error from the trigger/echo HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// Underlying error from the indicator output implementation.
    #[error("signal output error: {0:?}")]
    Signal(S),

    /// A measurement was requested while the driver was not running.
    #[error("sensor is not running (state: {0:?})")]
    NotRunning(RunState),

    /// Raw pin number does not fit a `PinId`.
    #[error("invalid pin number: {0}")]
    InvalidPin(i32),
}

impl<E: Debug, S: Debug> SonarError<E, S> {
    /// Legacy numeric status code for this error.
    ///
    /// Errors without a dedicated code report `ERR_BASE`.
    pub fn status_code(&self) -> i32 {
        match self {
            SonarError::NotRunning(_) => status::ERR_RUNSTATE,
            SonarError::Io(_) | SonarError::Signal(_) | SonarError::InvalidPin(_) => {
                status::ERR_BASE
            }
        }
    }

    #[inline]
    pub fn is_not_running(&self) -> bool {
        matches!(self, SonarError::NotRunning(_))
    }
}

// Note: thiserror implements core::error::Error for this type. The `std`
// feature only forwards to `thiserror/std`.
