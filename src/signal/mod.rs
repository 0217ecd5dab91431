// src/signal/mod.rs

//! Ready-made `SignalOutput` implementations.

use crate::common::{
    hal_traits::{SignalOutput, SonarIo},
    level::{Level, PinMode},
    pin::PinId,
};
use crate::zone::Zone;
use core::convert::Infallible;

/// Indicator lamps wired to numbered pins of a `SonarIo` platform.
///
/// Any lamp may be unassigned (`None`); it is then neither configured nor
/// written. Platforms whose I/O handle is a cheap copyable token can share
/// one handle between the driver and these lamps.
#[derive(Debug)]
pub struct PinSignals<IO> {
    io: IO,
    red: Option<PinId>,
    yellow: Option<PinId>,
    green: Option<PinId>,
}

impl<IO: SonarIo> PinSignals<IO> {
    pub fn new(io: IO, red: Option<PinId>, yellow: Option<PinId>, green: Option<PinId>) -> Self {
        PinSignals {
            io,
            red,
            yellow,
            green,
        }
    }

    /// Lamps with no pins at all.
    pub fn unassigned(io: IO) -> Self {
        Self::new(io, None, None, None)
    }

    /// Pin assigned to the lamp of `zone`, if any.
    pub fn pin(&self, zone: Zone) -> Option<PinId> {
        match zone {
            Zone::Red => self.red,
            Zone::Yellow => self.yellow,
            Zone::Green => self.green,
        }
    }

    /// Gives back the I/O handle.
    pub fn release(self) -> IO {
        self.io
    }
}

impl<IO: SonarIo> SignalOutput for PinSignals<IO> {
    type Error = IO::Error;

    fn configure(&mut self) -> Result<(), Self::Error> {
        for zone in Zone::PRIORITY {
            if let Some(pin) = self.pin(zone) {
                self.io.pin_mode(pin, PinMode::Output)?;
            }
        }
        Ok(())
    }

    fn set_lamp(&mut self, zone: Zone, level: Level) -> Result<(), Self::Error> {
        match self.pin(zone) {
            Some(pin) => self.io.digital_write(pin, level),
            None => Ok(()),
        }
    }
}

/// For sensors without any indicator hardware.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoSignals;

impl SignalOutput for NoSignals {
    type Error = Infallible;

    fn configure(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_lamp(&mut self, _zone: Zone, _level: Level) -> Result<(), Self::Error> {
        Ok(())
    }
}
