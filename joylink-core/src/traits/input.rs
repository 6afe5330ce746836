//! Joystick input trait

use joylink_protocol::RawSample;

/// Errors that can occur while sampling the sticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// An analog conversion failed or addressed a missing channel
    Adc,
}

/// Trait for anything that can produce one joystick reading
///
/// Implementations perform one conversion per axis and one digital read
/// of the switch. They must not block for longer than a conversion.
pub trait InputSampler {
    /// Take one reading of all four axes and the switch
    fn read_raw(&mut self) -> Result<RawSample, SampleError>;
}
