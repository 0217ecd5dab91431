// src/common/status.rs

//! Numeric status codes and sentinels shared with the classic Arduino-style
//! HC-SR04 libraries. The driver's API uses `Result`/`Option` instead, but
//! the values are kept for callers that report codes over a serial console
//! or compare against existing firmware.

/// Success.
pub const ERR_OK: i32 = 0;
/// Base of the error code range.
pub const ERR_BASE: i32 = -150;
/// Null/invalid reference. Reserved, never produced by this crate.
pub const ERR_NULLP: i32 = ERR_BASE - 1;
/// Measurement requested outside of the running state.
pub const ERR_RUNSTATE: i32 = ERR_BASE - 2;
/// Zone distances not configured. Reserved, never produced by this crate.
pub const ERR_DISTANCES: i32 = ERR_BASE - 3;

/// "Undefined" zone boundary.
pub const DISTANCE_UNDEF: i16 = -1;
/// "Unassigned" pin number.
pub const NO_PIN: i32 = -1;
