//! ESP32-C3-specific HAL for the joystick firmware
//!
//! Implements the shared `joylink-hal` traits over `esp-hal`:
//!
//! - ADC1 one-shot conversions for the four stick axes
//! - Pulled-up GPIO input for the push switch

#![no_std]

pub mod adc;
pub mod gpio;

pub use adc::JoystickAdc;
pub use gpio::SwitchInput;
