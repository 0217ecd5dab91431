// src/lib.rs

#![no_std]

pub mod common;
pub mod signal;
pub mod sonar;
pub mod zone;

#[cfg(feature = "impl-native")]
pub mod native;

// Re-export key types for convenience
pub use common::{Distance, PinId, RunState, SonarError};
pub use signal::{NoSignals, PinSignals};
pub use sonar::{Hcsr04, SonarConfig};
pub use zone::{NoMatchPolicy, Zone, ZoneBounds, ZoneTable};
