//! Raw reading to screen coordinate mapping
//!
//! Each joystick owns a square marker region on the panel. The mapper
//! scales a raw axis pair into that region and clamps the result onto
//! the panel, so no caller ever sees an off-screen point.

pub mod point;

pub use point::{map, map_sample, MarkerAnchor, ScreenPoint, Stick};
