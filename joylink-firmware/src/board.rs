//! Concrete peripheral types for the ESP32-C3 board
//!
//! Embassy tasks cannot be generic, so the driver stacks are spelled out here.

use bt_hci::controller::ExternalController;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::gpio::Output;
use esp_hal::spi::master::Spi;
use esp_hal::Blocking;
use esp_radio::ble::controller::BleConnector;

use joylink_drivers::display::St7735;
use joylink_drivers::input::JoystickSampler;
use joylink_hal_esp32c3::{JoystickAdc, SwitchInput};

/// SPI2 with a software chip select on GPIO10
pub type PanelSpi = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>;

/// ST7735S panel (DC on GPIO4, RST on GPIO5)
pub type Panel = St7735<PanelSpi, Output<'static>, Output<'static>>;

/// Four ADC1 channels plus the pulled-up switch
pub type Sampler = JoystickSampler<JoystickAdc, SwitchInput>;

/// HCI command slots shared with the radio
pub const HCI_SLOTS: usize = 20;

pub type BleController = ExternalController<BleConnector<'static>, HCI_SLOTS>;
