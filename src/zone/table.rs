// src/zone/table.rs

use super::{Zone, ZoneBounds};

/// Bounds of all three zones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ZoneTable {
    pub red: ZoneBounds,
    pub yellow: ZoneBounds,
    pub green: ZoneBounds,
}

impl ZoneTable {
    /// No zone configured; classification never matches.
    pub const UNDEFINED: ZoneTable = ZoneTable {
        red: ZoneBounds::UNDEFINED,
        yellow: ZoneBounds::UNDEFINED,
        green: ZoneBounds::UNDEFINED,
    };

    /// Preset bands in millimetres. The HC-SR04 cannot resolve much below
    /// 20 mm, so the red band effectively starts there.
    pub const PRESET: ZoneTable = ZoneTable {
        red: ZoneBounds::new(1, 30),
        yellow: ZoneBounds::new(30, 50),
        green: ZoneBounds::new(50, 200),
    };

    pub const fn new(red: ZoneBounds, yellow: ZoneBounds, green: ZoneBounds) -> Self {
        ZoneTable { red, yellow, green }
    }

    #[inline]
    pub fn get(&self, zone: Zone) -> ZoneBounds {
        match zone {
            Zone::Red => self.red,
            Zone::Yellow => self.yellow,
            Zone::Green => self.green,
        }
    }

    /// Stores `bounds` for `zone` without any validation.
    pub fn set(&mut self, zone: Zone, bounds: ZoneBounds) {
        match zone {
            Zone::Red => self.red = bounds,
            Zone::Yellow => self.yellow = bounds,
            Zone::Green => self.green = bounds,
        }
    }

    /// All six boundaries are defined and strictly positive.
    pub fn distances_set(&self) -> bool {
        self.red.is_defined() && self.yellow.is_defined() && self.green.is_defined()
    }

    /// Picks the zone for `value`.
    ///
    /// Zones may overlap or leave gaps: the first zone in `Zone::PRIORITY`
    /// that contains the value wins, `None` if no zone does.
    pub fn classify(&self, value: i16) -> Option<Zone> {
        Zone::PRIORITY
            .into_iter()
            .find(|zone| self.get(*zone).contains(value))
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::PRESET
    }
}
