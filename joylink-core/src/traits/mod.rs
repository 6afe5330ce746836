//! Hardware abstraction traits
//!
//! These traits define the interface between core logic and
//! board-specific drivers. Board crates implement them; everything in
//! this crate is written against them only.

pub mod display;
pub mod input;

pub use display::{DisplayError, DisplaySurface, Rgb565};
pub use input::{InputSampler, SampleError};
