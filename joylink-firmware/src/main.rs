//! JoyLink - Dual Joystick Telemetry Firmware
//!
//! Main firmware binary for ESP32-C3 boards. Samples two analog sticks and a
//! push switch, draws them on an ST7735S panel with minimal SPI traffic and
//! serves the latest reading as a BLE GATT attribute.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_radio::ble::controller::BleConnector;
use static_cell::StaticCell;
use {esp_backtrace as _, esp_println as _};

use bt_hci::controller::ExternalController;

use joylink_core::config::DeviceConfig;
use joylink_drivers::display::{St7735, St7735Config};
use joylink_drivers::input::{ChannelMap, JoystickSampler};
use joylink_hal_esp32c3::{JoystickAdc, SwitchInput};

mod board;
mod channels;
mod config;
mod tasks;

esp_bootloader_esp_idf::esp_app_desc!();

/// Panel SPI clock
const PANEL_SPI_MHZ: u32 = 26;

// Static cells for state that tasks borrow for the program lifetime
static DEVICE_CONFIG: StaticCell<DeviceConfig> = StaticCell::new();
static RADIO: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();

/// Main entry point
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    info!("JoyLink firmware starting...");

    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    // Heap for the radio stack
    esp_alloc::heap_allocator!(size: 72 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);
    info!("Scheduler started");

    let config: &'static DeviceConfig = DEVICE_CONFIG.init(config::load());

    // Panel: SPI2, SCK=GPIO6, MOSI=GPIO7, CS=GPIO10, DC=GPIO4, RST=GPIO5
    let spi_bus = unwrap!(Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(PANEL_SPI_MHZ))
            .with_mode(Mode::_0),
    ))
    .with_sck(peripherals.GPIO6)
    .with_mosi(peripherals.GPIO7);
    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let spi_device = unwrap!(ExclusiveDevice::new_no_delay(spi_bus, cs));
    let dc = Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default());
    let rst = Output::new(peripherals.GPIO5, Level::High, OutputConfig::default());

    let panel_config = St7735Config {
        width: config.display.width,
        height: config.display.height,
        ..St7735Config::default()
    };
    let mut panel = St7735::new(spi_device, dc, rst, panel_config);
    unwrap!(panel.init(&mut embassy_time::Delay).await);
    info!("Panel initialized");

    // Sticks on ADC1 channels 0-3, switch on GPIO9
    let adc = JoystickAdc::new(
        peripherals.ADC1,
        peripherals.GPIO0,
        peripherals.GPIO1,
        peripherals.GPIO2,
        peripherals.GPIO3,
    );
    let switch = SwitchInput::pulled_up(peripherals.GPIO9);
    let sampler = JoystickSampler::new(adc, switch, ChannelMap::default());
    info!("Input initialized");

    // Radio init needs the scheduler running
    let radio = RADIO.init(unwrap!(esp_radio::init()));
    let connector = unwrap!(BleConnector::new(radio, peripherals.BT, Default::default()));
    let controller: board::BleController = ExternalController::new(connector);
    info!("BLE controller initialized");

    spawner.must_spawn(tasks::sampler_task(sampler, panel, config));
    spawner.must_spawn(tasks::link_task(controller, config));
    info!("All tasks spawned");

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
