//! Raw joystick sample
//!
//! One sample is produced per sampling tick. It is a plain value: copied
//! into the telemetry slot and never mutated after construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest value a 12-bit conversion can produce
pub const ANALOG_MAX: u16 = 4095;

/// One reading of both joysticks and the push switch
///
/// Analog fields are always within `0..=ANALOG_MAX` and the switch is
/// always 0 or 1; the constructor clamps anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawSample {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
    sw: u8,
}

impl RawSample {
    /// Build a sample, clamping analog values to 12 bits and the switch to 0/1
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16, sw: u8) -> Self {
        Self {
            x1: clamp_analog(x1),
            y1: clamp_analog(y1),
            x2: clamp_analog(x2),
            y2: clamp_analog(y2),
            sw: if sw == 0 { 0 } else { 1 },
        }
    }

    /// Both sticks centred, switch released (pull-up idle level)
    pub const fn centered() -> Self {
        Self::new(2048, 2048, 2048, 2048, 1)
    }

    /// Left stick X
    pub const fn x1(&self) -> u16 {
        self.x1
    }

    /// Left stick Y
    pub const fn y1(&self) -> u16 {
        self.y1
    }

    /// Right stick X
    pub const fn x2(&self) -> u16 {
        self.x2
    }

    /// Right stick Y
    pub const fn y2(&self) -> u16 {
        self.y2
    }

    /// Raw switch level (0 = pressed with pull-up wiring)
    pub const fn sw(&self) -> u8 {
        self.sw
    }

    /// True when the switch is held down
    pub const fn is_pressed(&self) -> bool {
        self.sw == 0
    }
}

const fn clamp_analog(value: u16) -> u16 {
    if value > ANALOG_MAX {
        ANALOG_MAX
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_in_range_values() {
        let s = RawSample::new(0, 100, 4095, 2048, 1);
        assert_eq!(s.x1(), 0);
        assert_eq!(s.y1(), 100);
        assert_eq!(s.x2(), 4095);
        assert_eq!(s.y2(), 2048);
        assert_eq!(s.sw(), 1);
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        let s = RawSample::new(5000, u16::MAX, 4096, 0, 7);
        assert_eq!(s.x1(), ANALOG_MAX);
        assert_eq!(s.y1(), ANALOG_MAX);
        assert_eq!(s.x2(), ANALOG_MAX);
        assert_eq!(s.y2(), 0);
        assert_eq!(s.sw(), 1);
    }

    #[test]
    fn test_pressed_is_low_level() {
        assert!(RawSample::new(0, 0, 0, 0, 0).is_pressed());
        assert!(!RawSample::new(0, 0, 0, 0, 1).is_pressed());
        assert!(!RawSample::centered().is_pressed());
    }
}
