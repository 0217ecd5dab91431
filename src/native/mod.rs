// src/native/mod.rs

//! Adapters from `embedded-hal` 1.0 pins and delays to the driver's
//! collaborator traits (requires the `impl-native` feature).
//!
//! `embedded-hal` pins are typed objects rather than numbers, so
//! [`NativeSonar`] answers to two fixed pin ids and rejects any other.
//! Build the driver configuration with [`NativeSonar::config`].
//!
//! Echo widths are read off a free-running microsecond counter
//! ([`MicrosClock`]), so the time spent in pin reads is part of the
//! measurement.

use crate::common::{
    hal_traits::{SignalOutput, SonarIo, SonarTimer},
    level::{Level, PinMode},
    pin::PinId,
};
use crate::sonar::SonarConfig;
use crate::zone::Zone;
use core::fmt::Debug;
use core::time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use fugit::TimerInstantU32;

/// A reading of a 1 MHz counter.
pub type EchoInstant = TimerInstantU32<1_000_000>;

/// Longest echo wait that wrap-aware instant comparison can still time.
const MAX_BUDGET_US: u32 = u32::MAX / 2;

/// Free-running microsecond counter, e.g. a HAL timer in counter mode.
///
/// The counter may wrap; differences are taken wrap-aware.
pub trait MicrosClock {
    fn now(&mut self) -> EchoInstant;
}

/// Errors from the `embedded-hal` adapters.
#[derive(Debug, thiserror::Error)]
pub enum NativeError<TE, EE>
where
    TE: Debug,
    EE: Debug,
{
    #[error("trigger pin error: {0:?}")]
    Trigger(TE),

    #[error("echo pin error: {0:?}")]
    Echo(EE),

    /// The driver addressed a pin this adapter does not own.
    #[error("pin {0} is not owned by this adapter")]
    UnknownPin(PinId),
}

/// Trigger/echo interface over `embedded-hal` pins, a delay provider and a
/// microsecond clock.
#[derive(Debug)]
pub struct NativeSonar<T, E, D, C> {
    trigger: T,
    echo: E,
    delay: D,
    clock: C,
}

impl<T, E, D, C> NativeSonar<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    /// Id the driver must use for the trigger line.
    pub const TRIGGER: PinId = PinId::new(0);
    /// Id the driver must use for the echo line.
    pub const ECHO: PinId = PinId::new(1);

    /// Takes pins that are already configured as push-pull output (trigger)
    /// and input (echo).
    pub fn new(trigger: T, echo: E, delay: D, clock: C) -> Self {
        NativeSonar {
            trigger,
            echo,
            delay,
            clock,
        }
    }

    /// Default driver configuration addressing this adapter's pins.
    pub const fn config() -> SonarConfig {
        SonarConfig::new(Self::TRIGGER, Self::ECHO)
    }

    /// Gives back the pins, the delay provider and the clock.
    pub fn release(self) -> (T, E, D, C) {
        (self.trigger, self.echo, self.delay, self.clock)
    }

    fn check_pin(pin: PinId) -> Result<(), NativeError<T::Error, E::Error>> {
        if pin == Self::TRIGGER || pin == Self::ECHO {
            Ok(())
        } else {
            Err(NativeError::UnknownPin(pin))
        }
    }

    fn echo_is(&mut self, level: Level) -> Result<bool, NativeError<T::Error, E::Error>> {
        let high = self.echo.is_high().map_err(NativeError::Echo)?;
        Ok(high == level.is_high())
    }

    fn elapsed_us(&mut self, since: EchoInstant) -> u32 {
        self.clock
            .now()
            .checked_duration_since(since)
            .map_or(0, |d| d.ticks())
    }
}

impl<T, E, D, C> SonarTimer for NativeSonar<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

impl<T, E, D, C> SonarIo for NativeSonar<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    type Error = NativeError<T::Error, E::Error>;

    /// Pin direction is fixed by the pin types; only the id is checked.
    fn pin_mode(&mut self, pin: PinId, _mode: PinMode) -> Result<(), Self::Error> {
        Self::check_pin(pin)
    }

    fn digital_write(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        if pin != Self::TRIGGER {
            return Err(NativeError::UnknownPin(pin));
        }
        self.trigger
            .set_state(PinState::from(level.is_high()))
            .map_err(NativeError::Trigger)
    }

    /// Width of the next `level` pulse in clock microseconds, 0 if the whole
    /// call outlasts `timeout`. Timeouts past half the counter range are
    /// clamped to it.
    fn pulse_in(&mut self, pin: PinId, level: Level, timeout: Duration) -> Result<u32, Self::Error> {
        if pin != Self::ECHO {
            return Err(NativeError::UnknownPin(pin));
        }
        let budget = u32::try_from(timeout.as_micros())
            .unwrap_or(u32::MAX)
            .min(MAX_BUDGET_US);
        let start = self.clock.now();

        // A pulse already in progress is not measured.
        while self.echo_is(level)? {
            if self.elapsed_us(start) >= budget {
                return Ok(0);
            }
        }
        while !self.echo_is(level)? {
            if self.elapsed_us(start) >= budget {
                return Ok(0);
            }
        }

        let rise = self.clock.now();
        while self.echo_is(level)? {
            if self.elapsed_us(start) >= budget {
                return Ok(0);
            }
        }
        Ok(self.elapsed_us(rise))
    }
}

/// Indicator lamps on `embedded-hal` output pins.
///
/// All lamps share one pin type; use the HAL's type-erased pin when they sit
/// on different ports.
#[derive(Debug)]
pub struct NativeSignals<P> {
    red: Option<P>,
    yellow: Option<P>,
    green: Option<P>,
}

impl<P: OutputPin> NativeSignals<P> {
    pub fn new(red: Option<P>, yellow: Option<P>, green: Option<P>) -> Self {
        NativeSignals { red, yellow, green }
    }

    pub fn release(self) -> (Option<P>, Option<P>, Option<P>) {
        (self.red, self.yellow, self.green)
    }

    fn lamp(&mut self, zone: Zone) -> Option<&mut P> {
        match zone {
            Zone::Red => self.red.as_mut(),
            Zone::Yellow => self.yellow.as_mut(),
            Zone::Green => self.green.as_mut(),
        }
    }
}

impl<P: OutputPin> SignalOutput for NativeSignals<P> {
    type Error = P::Error;

    fn configure(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_lamp(&mut self, zone: Zone, level: Level) -> Result<(), Self::Error> {
        match self.lamp(zone) {
            Some(pin) => pin.set_state(PinState::from(level.is_high())),
            None => Ok(()),
        }
    }
}
