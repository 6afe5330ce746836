//! Input drivers

pub mod joystick;

pub use joystick::{ChannelMap, JoystickSampler};
