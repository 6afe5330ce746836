//! ADC1 channel bank for the two sticks
//!
//! GPIO0..=GPIO3 are ADC1 channels 0..=3 on the C3. All four run at 11 dB
//! attenuation so the full 0-3.3 V stick travel maps onto 0-4095.

use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO2, GPIO3};
use esp_hal::Blocking;
use joylink_hal::{AdcError, AnalogInput, ADC_MAX};

type Channel<P> = AdcPin<P, ADC1<'static>>;

/// ADC1 with the four stick channels enabled
pub struct JoystickAdc {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    ch0: Channel<GPIO0<'static>>,
    ch1: Channel<GPIO1<'static>>,
    ch2: Channel<GPIO2<'static>>,
    ch3: Channel<GPIO3<'static>>,
}

impl JoystickAdc {
    pub fn new(
        adc1: ADC1<'static>,
        gpio0: GPIO0<'static>,
        gpio1: GPIO1<'static>,
        gpio2: GPIO2<'static>,
        gpio3: GPIO3<'static>,
    ) -> Self {
        let mut config = AdcConfig::new();
        let ch0 = config.enable_pin(gpio0, Attenuation::_11dB);
        let ch1 = config.enable_pin(gpio1, Attenuation::_11dB);
        let ch2 = config.enable_pin(gpio2, Attenuation::_11dB);
        let ch3 = config.enable_pin(gpio3, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self { adc, ch0, ch1, ch2, ch3 }
    }
}

impl AnalogInput for JoystickAdc {
    fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
        let raw = match channel {
            0 => nb::block!(self.adc.read_oneshot(&mut self.ch0)),
            1 => nb::block!(self.adc.read_oneshot(&mut self.ch1)),
            2 => nb::block!(self.adc.read_oneshot(&mut self.ch2)),
            3 => nb::block!(self.adc.read_oneshot(&mut self.ch3)),
            _ => return Err(AdcError::InvalidChannel),
        };
        raw.map(|v| v.min(ADC_MAX)).map_err(|_| AdcError::Conversion)
    }
}
