//! Display drivers

pub mod st7735;

pub use st7735::{St7735, St7735Config};
