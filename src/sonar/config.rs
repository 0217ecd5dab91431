// src/sonar/config.rs

use crate::common::{pin::PinId, timing};
use crate::zone::{NoMatchPolicy, ZoneTable};
use core::time::Duration;

/// Everything the driver needs to know before it touches hardware.
///
/// Built once, then handed to [`Hcsr04::new`](super::Hcsr04::new). The
/// `with_*` methods return a modified copy so a configuration can be built
/// in a `const` context or in one expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SonarConfig {
    /// Output line that fires the sensor.
    pub trigger: PinId,
    /// Input line carrying the echo pulse.
    pub echo: PinId,
    /// Initial zone bounds.
    pub zones: ZoneTable,
    /// Lamp behaviour when a distance is outside every zone.
    pub no_match: NoMatchPolicy,
    /// Upper limit for the echo wait.
    pub echo_timeout: Duration,
    /// Half-trip scale factor, millimetres per microsecond.
    pub mm_per_us: f32,
}

impl SonarConfig {
    pub const fn new(trigger: PinId, echo: PinId) -> Self {
        SonarConfig {
            trigger,
            echo,
            zones: ZoneTable::PRESET,
            no_match: NoMatchPolicy::Hold,
            echo_timeout: timing::DEFAULT_ECHO_TIMEOUT,
            mm_per_us: timing::SOUND_MM_PER_US,
        }
    }

    pub const fn with_zones(mut self, zones: ZoneTable) -> Self {
        self.zones = zones;
        self
    }

    pub const fn with_no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.no_match = policy;
        self
    }

    pub const fn with_echo_timeout(mut self, timeout: Duration) -> Self {
        self.echo_timeout = timeout;
        self
    }

    /// Overrides the distance scale, e.g. to compensate for air temperature
    /// or to report in another unit.
    pub const fn with_mm_per_us(mut self, scale: f32) -> Self {
        self.mm_per_us = scale;
        self
    }
}
