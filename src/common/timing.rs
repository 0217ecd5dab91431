// src/common/timing.rs

use core::time::Duration;

// === Trigger Sequence (HC-SR04 datasheet) ===

/// Low time on the trigger line before the pulse, so the pulse starts from a clean edge.
pub const TRIGGER_SETTLE: Duration = Duration::from_micros(2);
/// Width of the trigger pulse (datasheet asks for at least 10 us).
pub const TRIGGER_PULSE: Duration = Duration::from_micros(10);

// === Echo ===

/// Default limit for waiting on the echo pulse. Matches the 1 s default of
/// the Arduino `pulseIn` primitive.
pub const DEFAULT_ECHO_TIMEOUT: Duration = Duration::from_secs(1);

// === Conversion ===

/// Millimetres travelled by sound per microsecond (343.2 m/s).
pub const SOUND_MM_PER_US: f32 = 0.3432;
