// src/common/hal_traits.rs

use super::{
    level::{Level, PinMode},
    pin::PinId,
};
use crate::zone::Zone;
use core::fmt::Debug;
use core::time::Duration;

/// Abstraction for the busy-wait delays needed by the trigger sequence.
///
/// Note: With the `impl-native` feature this is provided on top of
/// `embedded_hal::delay::DelayNs`.
pub trait SonarTimer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Abstraction for the digital I/O primitives of the host platform.
///
/// Pins are addressed by number, the way Arduino-style cores expose them.
pub trait SonarIo {
    /// Associated error type for pin access errors.
    type Error: Debug;

    /// Configures `pin` for input or output.
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error>;

    /// Drives an output pin to `level`.
    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Measures how long (in microseconds) `pin` stays at `level`, starting at
    /// its next transition to that level.
    ///
    /// Implementations must give up after `timeout` and return `Ok(0)`; the
    /// call must never block indefinitely.
    fn pulse_in(&mut self, pin: PinId, level: Level, timeout: Duration)
        -> Result<u32, Self::Error>;
}

/// Output capability for the three zone indicator lamps.
///
/// The driver decides *which* zone is lit; implementations only drive lines.
pub trait SignalOutput {
    /// Associated error type for output errors.
    type Error: Debug;

    /// Prepares the outputs for use (pin direction etc.).
    fn configure(&mut self) -> Result<(), Self::Error>;

    /// Sets the lamp belonging to `zone`. Lamps without hardware are ignored.
    fn set_lamp(&mut self, zone: Zone, level: Level) -> Result<(), Self::Error>;

    /// Lights exactly the lamp for `lit`, or none when `lit` is `None`.
    fn show(&mut self, lit: Option<Zone>) -> Result<(), Self::Error> {
        for zone in Zone::PRIORITY {
            self.set_lamp(zone, Level::from_on(lit == Some(zone)))?;
        }
        Ok(())
    }
}
