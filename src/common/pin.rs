// src/common/pin.rs

use super::{error::SonarError, status};
use core::convert::TryFrom;
use core::fmt;

/// Number of a digital pin on the host platform.
///
/// "Unassigned" is expressed as `Option<PinId>::None` rather than a sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PinId(u8);

impl PinId {
    #[inline]
    pub const fn new(number: u8) -> Self {
        PinId(number)
    }

    /// Converts a legacy pin number where `-1` means "no pin".
    ///
    /// Returns `Ok(None)` for the sentinel and an error for any other value
    /// that is not a valid pin number.
    pub fn from_legacy(raw: i32) -> Result<Option<Self>, SonarError> {
        if raw == status::NO_PIN {
            Ok(None)
        } else {
            Self::try_from(raw).map(Some)
        }
    }

    #[inline]
    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for PinId {
    type Error = SonarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(PinId)
            .map_err(|_| SonarError::InvalidPin(value))
    }
}

impl From<u8> for PinId {
    fn from(value: u8) -> Self {
        PinId(value)
    }
}

impl From<PinId> for u8 {
    fn from(value: PinId) -> Self {
        value.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}
