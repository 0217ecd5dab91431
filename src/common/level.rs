// src/common/level.rs

/// Logic level of a digital line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Indicator level for a lamp that should be lit (`true`) or dark.
    #[inline]
    pub const fn from_on(on: bool) -> Self {
        if on {
            Level::High
        } else {
            Level::Low
        }
    }

    #[inline]
    pub const fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        Level::from_on(value)
    }
}

/// Direction a pin is configured for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PinMode {
    Input,
    Output,
}
