//! Latest-sample telemetry
//!
//! The sampling loop is the only writer and the BLE read handler the only
//! reader. The slot is the only state the two share.

pub mod slot;

pub use slot::TelemetrySlot;
