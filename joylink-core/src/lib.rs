//! Board-agnostic core logic for the joystick telemetry firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (panel surface, input sampler)
//! - Raw reading to screen coordinate mapping
//! - Dirty-tracked dashboard renderer
//! - Shared telemetry slot read by the BLE link
//! - BLE link lifecycle state machine
//! - Device configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod link;
pub mod mapper;
pub mod render;
pub mod telemetry;
pub mod traits;
