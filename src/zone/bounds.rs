// src/zone/bounds.rs

use crate::common::status::DISTANCE_UNDEF;

/// Returns `true` if `value` lies between `from` and `to`, inclusive.
///
/// The bounds may be given in either order.
pub fn is_in_range(value: i16, from: i16, to: i16) -> bool {
    if from <= to {
        value >= from && value <= to
    } else {
        value <= from && value >= to
    }
}

/// Inclusive distance interval of a zone, in whole millimetres.
///
/// `from` may be greater than `to`; containment does not depend on order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ZoneBounds {
    pub from: i16,
    pub to: i16,
}

impl ZoneBounds {
    /// Bounds that have not been configured.
    pub const UNDEFINED: ZoneBounds = ZoneBounds {
        from: DISTANCE_UNDEF,
        to: DISTANCE_UNDEF,
    };

    pub const fn new(from: i16, to: i16) -> Self {
        ZoneBounds { from, to }
    }

    /// Both ends are set and strictly positive.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        self.from != DISTANCE_UNDEF && self.from > 0 && self.to != DISTANCE_UNDEF && self.to > 0
    }

    #[inline]
    pub fn contains(&self, value: i16) -> bool {
        is_in_range(value, self.from, self.to)
    }
}

impl Default for ZoneBounds {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl From<(i16, i16)> for ZoneBounds {
    fn from((from, to): (i16, i16)) -> Self {
        ZoneBounds { from, to }
    }
}
