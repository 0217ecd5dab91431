// src/zone/mod.rs

//! Proximity zones and the pure classification logic behind the indicator
//! lamps. Nothing in here touches hardware.

pub mod bounds;
pub mod table;

pub use bounds::{is_in_range, ZoneBounds};
pub use table::ZoneTable;

use core::fmt;

/// One of the three proximity zones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Zone {
    Red,
    Yellow,
    Green,
}

impl Zone {
    /// Order in which zones are tested; the first containing zone wins.
    pub const PRIORITY: [Zone; 3] = [Zone::Red, Zone::Yellow, Zone::Green];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Red => write!(f, "red"),
            Zone::Yellow => write!(f, "yellow"),
            Zone::Green => write!(f, "green"),
        }
    }
}

/// What happens to the lamps when a distance falls outside every zone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum NoMatchPolicy {
    /// Leave the lamps as the previous classification set them.
    #[default]
    Hold,
    /// Switch all lamps off.
    Clear,
}
