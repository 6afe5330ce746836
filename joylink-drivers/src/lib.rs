//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in joylink-core:
//!
//! - Display surface (ST7735 SPI TFT)
//! - Input sampler (two analog sticks plus push switch)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
