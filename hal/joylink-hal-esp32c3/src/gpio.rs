//! Push switch input

use esp_hal::gpio::{Input, InputConfig, InputPin as EspInputPin, Pull};
use joylink_hal::InputPin;

/// Active-low switch on a pulled-up pin
pub struct SwitchInput {
    pin: Input<'static>,
}

impl SwitchInput {
    /// Configure `pin` as an input with the internal pull-up enabled
    pub fn pulled_up(pin: impl EspInputPin + 'static) -> Self {
        let pin = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        Self { pin }
    }
}

impl InputPin for SwitchInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
