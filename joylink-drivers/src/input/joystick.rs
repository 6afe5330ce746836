//! Dual joystick sampler
//!
//! Two analog sticks on four ADC channels plus one push switch wired to a
//! pulled-up input. The switch reads 1 when released and 0 when held.

use joylink_core::traits::{InputSampler, SampleError};
use joylink_hal::{AnalogInput, InputPin};
use joylink_protocol::RawSample;

/// Logical ADC channel for each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
}

impl Default for ChannelMap {
    /// Stock board: the right stick's axes are wired swapped (X2 on 3, Y2 on 2)
    fn default() -> Self {
        Self { x1: 0, y1: 1, x2: 3, y2: 2 }
    }
}

/// Reads both sticks and the switch in one call
pub struct JoystickSampler<A, P> {
    adc: A,
    switch: P,
    channels: ChannelMap,
}

impl<A: AnalogInput, P: InputPin> JoystickSampler<A, P> {
    pub fn new(adc: A, switch: P, channels: ChannelMap) -> Self {
        Self { adc, switch, channels }
    }

    pub fn channels(&self) -> ChannelMap {
        self.channels
    }

    fn read_channel(&mut self, channel: u8) -> Result<u16, SampleError> {
        self.adc.read(channel).map_err(|_| SampleError::Adc)
    }
}

impl<A: AnalogInput, P: InputPin> InputSampler for JoystickSampler<A, P> {
    fn read_raw(&mut self) -> Result<RawSample, SampleError> {
        let ch = self.channels;
        let x1 = self.read_channel(ch.x1)?;
        let y1 = self.read_channel(ch.y1)?;
        let x2 = self.read_channel(ch.x2)?;
        let y2 = self.read_channel(ch.y2)?;
        let sw = self.switch.level();
        Ok(RawSample::new(x1, y1, x2, y2, sw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use joylink_hal::AdcError;

    /// ADC returning a fixed value per channel
    struct MockAdc {
        values: [u16; 4],
    }

    impl AnalogInput for MockAdc {
        fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
            self.values
                .get(channel as usize)
                .copied()
                .ok_or(AdcError::InvalidChannel)
        }
    }

    struct MockPin {
        high: Cell<bool>,
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    #[test]
    fn test_channels_routed_per_map() {
        let adc = MockAdc { values: [10, 11, 12, 13] };
        let pin = MockPin { high: Cell::new(true) };
        let mut sampler = JoystickSampler::new(adc, pin, ChannelMap::default());
        assert_eq!(sampler.read_raw(), Ok(RawSample::new(10, 11, 13, 12, 1)));
    }

    #[test]
    fn test_switch_held_reads_zero() {
        let adc = MockAdc { values: [2048; 4] };
        let pin = MockPin { high: Cell::new(false) };
        let mut sampler = JoystickSampler::new(adc, pin, ChannelMap::default());
        let sample = sampler.read_raw().unwrap();
        assert_eq!(sample.sw(), 0);
        assert!(sample.is_pressed());
    }

    #[test]
    fn test_missing_channel_is_error() {
        let adc = MockAdc { values: [0; 4] };
        let pin = MockPin { high: Cell::new(true) };
        let map = ChannelMap { y2: 7, ..ChannelMap::default() };
        let mut sampler = JoystickSampler::new(adc, pin, map);
        assert_eq!(sampler.read_raw(), Err(SampleError::Adc));
    }

    #[test]
    fn test_out_of_range_reading_clamped() {
        let adc = MockAdc { values: [5000, 0, 4095, 4096] };
        let pin = MockPin { high: Cell::new(true) };
        let mut sampler = JoystickSampler::new(adc, pin, ChannelMap::default());
        let sample = sampler.read_raw().unwrap();
        assert_eq!(sample.x1(), 4095);
        assert_eq!(sample.x2(), 4095);
    }
}
