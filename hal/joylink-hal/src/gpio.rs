//! GPIO pin abstractions
//!
//! Provides the digital input trait implemented by chip-specific HALs.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Pin level as a binary value (0 = low, 1 = high)
    fn level(&self) -> u8 {
        u8::from(self.is_high())
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_level_follows_pin() {
        assert_eq!(FixedPin(true).level(), 1);
        assert_eq!(FixedPin(false).level(), 0);
        assert!(FixedPin(false).is_low());
    }

    #[test]
    fn test_reference_forwards() {
        let pin = FixedPin(true);
        let by_ref = &pin;
        assert!(by_ref.is_high());
        assert_eq!(by_ref.level(), 1);
    }
}
