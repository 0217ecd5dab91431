// src/common/types.rs

use core::fmt;

// --- Distance ---

/// A measured distance in millimetres.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Distance(f32);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Creates a new distance from a millimetre value.
    pub fn from_mm(mm: f32) -> Self {
        Self(mm)
    }

    /// Converts a round-trip echo duration into a one-way distance.
    ///
    /// The duration is halved in whole microseconds before scaling, so an odd
    /// count loses its last microsecond. A zero duration (no echo) is a
    /// distance of zero.
    pub fn from_echo_us(duration_us: u32, mm_per_us: f32) -> Self {
        Self((duration_us / 2) as f32 * mm_per_us)
    }

    /// Returns the distance in millimetres.
    pub fn mm(&self) -> f32 {
        self.0
    }

    /// Returns the distance in centimetres.
    pub fn cm(&self) -> f32 {
        self.0 / 10.0
    }

    /// Whole-millimetre value used for zone comparisons.
    ///
    /// Truncates toward zero and saturates at the `i16` limits.
    pub fn as_zone_value(&self) -> i16 {
        self.0 as i16
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mm", self.0)
    }
}

// --- Run State ---

/// Operating mode of the driver; only `Running` permits measurements.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[repr(i32)]
pub enum RunState {
    #[default]
    Unknown = 0,
    Created = 1,
    Running = 2,
    Paused = 3,
    Stopped = 4,
    /// Reserved: no operation moves the driver into this state.
    Ended = 5,
}

impl RunState {
    /// Tries to convert a legacy numeric state code into a `RunState`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RunState::Unknown),
            1 => Some(RunState::Created),
            2 => Some(RunState::Running),
            3 => Some(RunState::Paused),
            4 => Some(RunState::Stopped),
            5 => Some(RunState::Ended),
            _ => None,
        }
    }

    /// Returns the legacy numeric state code.
    #[inline]
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    #[inline]
    pub const fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RunState::*;
        match self {
            Unknown => write!(f, "unknown"),
            Created => write!(f, "created"),
            Running => write!(f, "running"),
            Paused => write!(f, "paused"),
            Stopped => write!(f, "stopped"),
            Ended => write!(f, "ended"),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_distance_from_echo() {
        // 1000 us round trip -> 500 us one way
        assert_eq!(Distance::from_echo_us(1000, 0.3432).mm(), 500.0 * 0.3432);
        // Odd counts are halved as integers
        assert_eq!(Distance::from_echo_us(1001, 0.3432), Distance::from_echo_us(1000, 0.3432));
        assert_eq!(Distance::from_echo_us(1, 0.3432), Distance::ZERO);
        assert_eq!(Distance::from_echo_us(0, 0.3432), Distance::ZERO);
    }

    #[test]
    fn test_distance_units() {
        let d = Distance::from_mm(125.0);
        assert_eq!(d.mm(), 125.0);
        assert_eq!(d.cm(), 12.5);

        let mut buf: String<16> = String::new();
        write!(buf, "{}", d).unwrap();
        assert_eq!(buf.as_str(), "125.0 mm");
    }

    #[test]
    fn test_zone_value_truncates() {
        assert_eq!(Distance::from_mm(29.99).as_zone_value(), 29);
        assert_eq!(Distance::from_mm(-152.0).as_zone_value(), -152);
        assert_eq!(Distance::from_mm(1.0e9).as_zone_value(), i16::MAX);
    }

    #[test]
    fn test_run_state_codes() {
        for code in 0..=5 {
            let state = RunState::from_code(code).unwrap();
            assert_eq!(state.code(), code);
        }
        assert_eq!(RunState::from_code(6), None);
        assert_eq!(RunState::from_code(-1), None);
        assert_eq!(RunState::Created.code(), 1);
        assert_eq!(RunState::Running.code(), 2);
    }

    #[test]
    fn test_only_running_is_running() {
        assert!(RunState::Running.is_running());
        for state in [
            RunState::Unknown,
            RunState::Created,
            RunState::Paused,
            RunState::Stopped,
            RunState::Ended,
        ] {
            assert!(!state.is_running());
        }
    }
}
