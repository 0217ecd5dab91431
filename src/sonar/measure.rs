// src/sonar/measure.rs

use super::{DriverError, Hcsr04};
use crate::common::{
    error::SonarError,
    hal_traits::{SignalOutput, SonarIo, SonarTimer},
    level::Level,
    status,
    timing,
    types::Distance,
};
use crate::zone::{NoMatchPolicy, Zone};
use log::{debug, trace};

// Implementation block for measurement and lamp driving
impl<IF, S> Hcsr04<IF, S>
where
    IF: SonarIo + SonarTimer,
    S: SignalOutput,
{
    /// Takes one measurement and updates the lamps.
    ///
    /// Blocks for the trigger sequence plus the echo wait (at most
    /// `config.echo_timeout`). A missing echo is reported as a distance of
    /// zero. Outside of `RunState::Running` no hardware is touched, the lamps
    /// are classified against the `ERR_RUNSTATE` sentinel and
    /// `SonarError::NotRunning` is returned.
    pub fn ping(&mut self) -> Result<Distance, DriverError<IF, S>> {
        if !self.state.is_running() {
            debug!("hcsr04 ping refused in state {}", self.state);
            self.check_range(status::ERR_RUNSTATE as f32)?;
            return Err(SonarError::NotRunning(self.state));
        }

        self.send_trigger()?;
        let duration_us = self
            .interface
            .pulse_in(self.config.echo, Level::High, self.config.echo_timeout)
            .map_err(SonarError::Io)?;

        let distance = Distance::from_echo_us(duration_us, self.config.mm_per_us);
        trace!("hcsr04 echo {} us -> {}", duration_us, distance);

        self.check_range(distance.mm())?;
        Ok(distance)
    }

    /// Classifies `distance` (truncated to whole units) and drives the lamps.
    ///
    /// With signaling off all lamps are switched off. Otherwise the first
    /// matching zone in red, yellow, green order is lit and the others
    /// switched off. If nothing matches, the no-match policy decides whether
    /// the lamps keep their state or go dark. Returns the lit zone.
    pub fn check_range(&mut self, distance: f32) -> Result<Option<Zone>, DriverError<IF, S>> {
        if !self.signal {
            self.signals.show(None).map_err(SonarError::Signal)?;
            return Ok(None);
        }

        let value = Distance::from_mm(distance).as_zone_value();
        let lit = self.zones.classify(value);
        trace!("hcsr04 classify {} -> {:?}", value, lit);

        match lit {
            Some(zone) => self.signals.show(Some(zone)).map_err(SonarError::Signal)?,
            None if self.no_match == NoMatchPolicy::Clear => {
                self.signals.show(None).map_err(SonarError::Signal)?
            }
            None => {}
        }
        Ok(lit)
    }

    /// Low, settle, high, pulse width, low.
    fn send_trigger(&mut self) -> Result<(), DriverError<IF, S>> {
        let trigger = self.config.trigger;
        self.interface
            .digital_write(trigger, Level::Low)
            .map_err(SonarError::Io)?;
        self.interface
            .delay_us(timing::TRIGGER_SETTLE.as_micros() as u32);
        self.interface
            .digital_write(trigger, Level::High)
            .map_err(SonarError::Io)?;
        self.interface
            .delay_us(timing::TRIGGER_PULSE.as_micros() as u32);
        self.interface
            .digital_write(trigger, Level::Low)
            .map_err(SonarError::Io)?;
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::super::tests::{pins, sonar_with, IoCall, MockInterface, MockLamps, MockPinError};
    use super::*;
    use crate::common::{pin::PinId, types::RunState};
    use crate::signal::NoSignals;
    use crate::sonar::SonarConfig;
    use core::time::Duration;

    #[test]
    fn test_ping_runs_trigger_sequence() {
        let mut sonar = sonar_with(1000);
        sonar.run();
        let distance = sonar.ping().unwrap();
        assert_eq!(distance, Distance::from_mm(500.0 * 0.3432));

        let (iface, _) = sonar.release();
        // Skip the two pin_mode calls from construction
        assert_eq!(
            &iface.calls[2..],
            &[
                IoCall::Write(2, Level::Low),
                IoCall::Delay(2),
                IoCall::Write(2, Level::High),
                IoCall::Delay(10),
                IoCall::Write(2, Level::Low),
                IoCall::PulseIn(3, Level::High, Duration::from_secs(1)),
            ]
        );
    }

    #[test]
    fn test_ping_uses_configured_timeout_and_scale() {
        let (trigger, echo) = pins();
        let config = SonarConfig::new(trigger, echo)
            .with_echo_timeout(Duration::from_millis(25))
            .with_mm_per_us(0.03432);
        let mut sonar = Hcsr04::new(MockInterface::with_echo(2000), NoSignals, config).unwrap();
        sonar.run();
        assert_eq!(sonar.ping().unwrap(), Distance::from_mm(1000.0 * 0.03432));

        let (iface, _) = sonar.release();
        assert_eq!(
            iface.calls.last(),
            Some(&IoCall::PulseIn(3, Level::High, Duration::from_millis(25)))
        );
    }

    #[test]
    fn test_ping_without_echo_is_zero() {
        let mut sonar = sonar_with(0);
        sonar.run();
        assert_eq!(sonar.ping().unwrap(), Distance::ZERO);
    }

    #[test]
    fn test_ping_when_not_running_touches_no_hardware() {
        for prepare in [
            None,
            Some(RunState::Paused),
            Some(RunState::Stopped),
        ] {
            let mut sonar = sonar_with(1000);
            match prepare {
                Some(RunState::Paused) => {
                    sonar.pause();
                }
                Some(RunState::Stopped) => {
                    sonar.stop();
                }
                _ => {}
            }
            let state = sonar.run_state();
            let err = sonar.ping().unwrap_err();
            assert!(matches!(err, SonarError::NotRunning(s) if s == state));
            assert_eq!(err.status_code(), status::ERR_RUNSTATE);

            let (iface, _) = sonar.release();
            assert_eq!(iface.calls.len(), 2, "only construction pin modes expected");
        }
    }

    #[test]
    fn test_scenario_pause_blocks_ping() {
        let (trigger, echo) = (PinId::new(2), PinId::new(3));
        let mut sonar = Hcsr04::with_pins(MockInterface::with_echo(300), NoSignals, trigger, echo).unwrap();
        assert_eq!(sonar.run_state(), RunState::Created);
        assert!(sonar.signal());
        assert_eq!(sonar.run(), RunState::Running);
        assert!(sonar.ping().is_ok());
        assert_eq!(sonar.pause(), RunState::Paused);
        assert!(matches!(sonar.ping(), Err(SonarError::NotRunning(RunState::Paused))));
    }

    #[test]
    fn test_refused_ping_classifies_sentinel() {
        // A zone containing the sentinel shows that classification saw it.
        let mut sonar = sonar_with(0);
        sonar.set_red_range(1, 30);
        sonar.set_yellow_range(-200, -100);
        assert!(sonar.ping().is_err());
        let (_, lamps) = sonar.release();
        assert_eq!(lamps.lit(), Some(Zone::Yellow));
    }

    #[test]
    fn test_refused_ping_with_signal_off_darkens_lamps() {
        let mut sonar = sonar_with(0);
        sonar.check_range(25.0).unwrap();
        sonar.signal_off();
        assert!(sonar.ping().is_err());
        let (_, lamps) = sonar.release();
        assert_eq!(lamps.levels, [Some(Level::Low); 3]);
    }

    #[test]
    fn test_ping_drives_lamps() {
        // 146 us one way * 0.3432 = 50.1 mm -> yellow (50 is shared, yellow wins)
        let mut sonar = sonar_with(292);
        sonar.run();
        let d = sonar.ping().unwrap();
        assert_eq!(d.as_zone_value(), 50);
        let (_, lamps) = sonar.release();
        assert_eq!(lamps.lit(), Some(Zone::Yellow));
        assert_eq!(lamps.level(Zone::Red), Some(Level::Low));
        assert_eq!(lamps.level(Zone::Green), Some(Level::Low));
    }

    #[test]
    fn test_check_range_scenario_with_hold() {
        let mut sonar = sonar_with(0);
        sonar.set_red_range(1, 30);
        sonar.set_yellow_range(30, 50);
        sonar.set_green_range(50, 200);

        assert_eq!(sonar.check_range(25.0).unwrap(), Some(Zone::Red));
        assert_eq!(sonar.check_range(40.0).unwrap(), Some(Zone::Yellow));

        let writes_before = sonar.lamp_writes();
        assert_eq!(sonar.check_range(1000.0).unwrap(), None);
        // Outside all zones: lamps keep the yellow reading
        assert_eq!(sonar.lamp_writes(), writes_before);

        let (_, lamps) = sonar.release();
        assert_eq!(lamps.level(Zone::Red), Some(Level::Low));
        assert_eq!(lamps.level(Zone::Yellow), Some(Level::High));
        assert_eq!(lamps.level(Zone::Green), Some(Level::Low));
    }

    #[test]
    fn test_check_range_with_clear_policy() {
        let mut sonar = sonar_with(0);
        sonar.set_no_match_policy(NoMatchPolicy::Clear);
        sonar.check_range(40.0).unwrap();
        assert_eq!(sonar.check_range(1000.0).unwrap(), None);
        let (_, lamps) = sonar.release();
        assert_eq!(lamps.lit(), None);
        assert_eq!(lamps.levels, [Some(Level::Low); 3]);
    }

    #[test]
    fn test_check_range_uses_configured_policy() {
        let (trigger, echo) = pins();
        let config = SonarConfig::new(trigger, echo).with_no_match(NoMatchPolicy::Clear);
        let mut sonar = Hcsr04::new(MockInterface::default(), MockLamps::default(), config).unwrap();
        assert_eq!(sonar.no_match_policy(), NoMatchPolicy::Clear);
        sonar.check_range(25.0).unwrap();
        sonar.check_range(1000.0).unwrap();
        let (_, lamps) = sonar.release();
        assert_eq!(lamps.lit(), None);
    }

    #[test]
    fn test_check_range_inverted_bounds() {
        let mut sonar = sonar_with(0);
        sonar.set_red_range(50, 10);
        assert_eq!(sonar.check_range(30.0).unwrap(), Some(Zone::Red));
    }

    #[test]
    fn test_check_range_truncates() {
        let mut sonar = sonar_with(0);
        // 30.9 truncates to 30: still red
        assert_eq!(sonar.check_range(30.9).unwrap(), Some(Zone::Red));
        // 0.9 truncates to 0: outside every preset zone
        assert_eq!(sonar.check_range(0.9).unwrap(), None);
    }

    #[test]
    fn test_check_range_with_signal_off() {
        let mut sonar = sonar_with(0);
        sonar.check_range(25.0).unwrap();
        sonar.signal_off();
        assert_eq!(sonar.check_range(25.0).unwrap(), None);
        let (_, lamps) = sonar.release();
        assert_eq!(lamps.levels, [Some(Level::Low); 3]);
    }

    #[test]
    fn test_trigger_error_propagates() {
        let (trigger, echo) = pins();
        let mut sonar = Hcsr04::with_pins(MockInterface::default(), MockLamps::default(), trigger, echo).unwrap();
        sonar.run();
        sonar.interface.fail_writes = true;
        assert!(matches!(sonar.ping(), Err(SonarError::Io(MockPinError))));
    }

    impl Hcsr04<MockInterface, MockLamps> {
        fn lamp_writes(&self) -> usize {
            self.signals.writes
        }
    }
}
