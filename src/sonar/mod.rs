// src/sonar/mod.rs

mod config;
mod measure;

pub use config::SonarConfig;

use crate::common::{
    error::SonarError,
    hal_traits::{SignalOutput, SonarIo, SonarTimer},
    level::PinMode,
    pin::PinId,
    types::RunState,
};
use crate::zone::{NoMatchPolicy, Zone, ZoneBounds, ZoneTable};
use log::debug;

/// Error type of a driver built on interface `IF` and lamps `S`.
pub type DriverError<IF, S> = SonarError<<IF as SonarIo>::Error, <S as SignalOutput>::Error>;

/// Driver for one HC-SR04 class ultrasonic sensor with optional zone lamps.
#[derive(Debug)]
pub struct Hcsr04<IF, S>
where
    IF: SonarIo + SonarTimer,
    S: SignalOutput,
{
    interface: IF,
    signals: S,
    config: SonarConfig,
    zones: ZoneTable,
    no_match: NoMatchPolicy,
    signal: bool,
    state: RunState,
}

impl<IF, S> Hcsr04<IF, S>
where
    IF: SonarIo + SonarTimer,
    S: SignalOutput,
{
    /// Sets up the pins and lamps described by `config`.
    ///
    /// Trigger becomes an output, echo an input, all lamps are switched off
    /// and the configured zones are applied. Signaling is enabled if the
    /// zones are fully defined. The driver starts in `RunState::Created`.
    pub fn new(interface: IF, signals: S, config: SonarConfig) -> Result<Self, DriverError<IF, S>> {
        let mut sonar = Hcsr04 {
            interface,
            signals,
            config,
            zones: config.zones,
            no_match: config.no_match,
            signal: false,
            state: RunState::Unknown,
        };
        sonar.init()?;
        Ok(sonar)
    }

    /// Shorthand for [`new`](Self::new) with the default configuration.
    pub fn with_pins(
        interface: IF,
        signals: S,
        trigger: PinId,
        echo: PinId,
    ) -> Result<Self, DriverError<IF, S>> {
        Self::new(interface, signals, SonarConfig::new(trigger, echo))
    }

    fn init(&mut self) -> Result<(), DriverError<IF, S>> {
        self.interface
            .pin_mode(self.config.trigger, PinMode::Output)
            .map_err(SonarError::Io)?;
        self.interface
            .pin_mode(self.config.echo, PinMode::Input)
            .map_err(SonarError::Io)?;
        self.signals.configure().map_err(SonarError::Signal)?;
        self.signals.show(None).map_err(SonarError::Signal)?;

        self.signal_on();
        self.state = RunState::Created;
        debug!(
            "hcsr04 created: trigger {}, echo {}, signal {}",
            self.config.trigger, self.config.echo, self.signal
        );
        Ok(())
    }

    // --- Lifecycle ---

    pub fn pause(&mut self) -> RunState {
        self.transition(RunState::Paused)
    }

    /// Enters `Running`, re-evaluating the signaling flag first.
    pub fn run(&mut self) -> RunState {
        self.signal_on();
        self.transition(RunState::Running)
    }

    pub fn stop(&mut self) -> RunState {
        self.transition(RunState::Stopped)
    }

    fn transition(&mut self, next: RunState) -> RunState {
        debug!("hcsr04 {} -> {}", self.state, next);
        self.state = next;
        self.state
    }

    #[inline]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    // --- Zone configuration ---

    /// Stores the bounds for `zone` as given. Does not touch the signaling flag.
    ///
    /// Cannot fail, so nothing is returned; the legacy API returned
    /// `ERR_OK` here.
    pub fn set_range(&mut self, zone: Zone, from: i16, to: i16) {
        self.zones.set(zone, ZoneBounds::new(from, to));
    }

    /// See [`set_range`](Self::set_range); returns `()` rather than `ERR_OK`.
    pub fn set_red_range(&mut self, from: i16, to: i16) {
        self.set_range(Zone::Red, from, to);
    }

    /// See [`set_range`](Self::set_range); returns `()` rather than `ERR_OK`.
    pub fn set_yellow_range(&mut self, from: i16, to: i16) {
        self.set_range(Zone::Yellow, from, to);
    }

    /// See [`set_range`](Self::set_range); returns `()` rather than `ERR_OK`.
    pub fn set_green_range(&mut self, from: i16, to: i16) {
        self.set_range(Zone::Green, from, to);
    }

    #[inline]
    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    /// Overrides the no-match policy taken from the configuration.
    pub fn set_no_match_policy(&mut self, policy: NoMatchPolicy) {
        self.no_match = policy;
    }

    #[inline]
    pub fn no_match_policy(&self) -> NoMatchPolicy {
        self.no_match
    }

    // --- Signaling ---

    /// Enables signaling, but only if every zone is fully defined.
    pub fn signal_on(&mut self) {
        self.signal = self.zones.distances_set();
        debug!("hcsr04 signal {}", self.signal);
    }

    pub fn signal_off(&mut self) {
        self.signal = false;
        debug!("hcsr04 signal off");
    }

    #[inline]
    pub fn signal(&self) -> bool {
        self.signal
    }

    // --- Accessors ---

    /// The configuration the driver was built with.
    ///
    /// Zone and policy changes made afterwards are not reflected here; read
    /// them through [`zones`](Self::zones) and
    /// [`no_match_policy`](Self::no_match_policy).
    #[inline]
    pub fn config(&self) -> &SonarConfig {
        &self.config
    }

    /// Gives back the interface and the lamps.
    pub fn release(self) -> (IF, S) {
        (self.interface, self.signals)
    }
}
