//! JoyLink telemetry protocol
//!
//! This crate defines the joystick sample that flows from the sampling loop
//! to the BLE link, and the text format it is published in.
//!
//! # Attribute format
//!
//! The telemetry characteristic is plain ASCII, five decimal fields joined
//! by commas in fixed order:
//!
//! ```text
//! x1,y1,x2,y2,sw
//! 2048,2048,2048,2048,0
//! ```
//!
//! There is no length prefix, terminator or checksum. The value never
//! exceeds [`MAX_ATTRIBUTE_LEN`] bytes; longer text is cut at that length.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod gatt;
pub mod sample;
pub mod telemetry;

pub use gatt::{
    advertising_data, AdvertisingData, DEVICE_INFO_SERVICE_UUID16, TELEMETRY_CHAR_UUID16,
};
pub use sample::{RawSample, ANALOG_MAX};
pub use telemetry::{
    encode, parse, truncate, TelemetryError, TelemetryText, FIELD_SEPARATOR, MAX_ATTRIBUTE_LEN,
};
