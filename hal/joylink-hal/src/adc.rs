//! Analog input abstractions
//!
//! The joystick needs four single-ended 12-bit conversions per tick. The
//! trait addresses channels by a small logical index so a driver does not
//! need to know how the chip maps channels to pins.

/// Full-scale value of a 12-bit conversion
pub const ADC_MAX: u16 = 4095;

/// ADC read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel index not wired on this board
    InvalidChannel,
    /// Conversion did not complete
    Conversion,
}

/// Multi-channel analog input
pub trait AnalogInput {
    /// Perform a blocking one-shot conversion on `channel`
    ///
    /// Returns the raw 12-bit value (0-4095). Implementations must never
    /// return a value above [`ADC_MAX`].
    fn read(&mut self, channel: u8) -> Result<u16, AdcError>;
}
