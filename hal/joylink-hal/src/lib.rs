//! JoyLink Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. Drivers in `joylink-drivers` are written against
//! these traits so they can be exercised on the host with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (joylink-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joylink-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ joylink-hal-  │
//!             │    esp32c3    │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input
//! - [`adc::AnalogInput`] - Multi-channel 12-bit ADC reads

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput, ADC_MAX};
pub use gpio::InputPin;
