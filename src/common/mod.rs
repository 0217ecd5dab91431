// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod level;
pub mod pin;
pub mod status;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From error.rs
pub use error::SonarError;

// From hal_traits.rs
pub use hal_traits::{SignalOutput, SonarIo, SonarTimer};

// From level.rs
pub use level::{Level, PinMode};

// From pin.rs
pub use pin::PinId;

// From types.rs
pub use types::{Distance, RunState};

// status.rs and timing.rs are constants - access via common::status::* / common::timing::*
