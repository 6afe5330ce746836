//! State shared between the sampling and link tasks
//!
//! The sampler is the only writer. The link task reads on demand when a
//! central asks for the telemetry attribute.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use joylink_core::telemetry::TelemetrySlot;

/// Latest raw sample, all zeros until the first tick
pub static TELEMETRY: TelemetrySlot<CriticalSectionRawMutex> = TelemetrySlot::new();
