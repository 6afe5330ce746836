//! ST7735 / ST7735S SPI TFT driver
//!
//! Implements [`DisplaySurface`] over a blocking `SpiDevice` plus a
//! data/command pin. Chip select is owned by the `SpiDevice`. Pixel data
//! goes straight to panel RAM; there is no framebuffer.
//!
//! Initialisation is async so the firmware can await the controller's
//! reset and sleep-out delays without blocking the executor.
//!
//! ```ignore
//! let mut panel = St7735::new(spi_device, dc, rst, St7735Config::default());
//! panel.init(&mut embassy_time::Delay).await?;
//! let mut canvas = Canvas::new(panel);
//! ```

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use embedded_hal_async::delay::DelayNs;
use joylink_core::traits::{DisplayError, DisplaySurface};

// ST7735 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVOFF: u8 = 0x20;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;
const FRMCTR1: u8 = 0xB1;
const FRMCTR2: u8 = 0xB2;
const FRMCTR3: u8 = 0xB3;
const INVCTR: u8 = 0xB4;
const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const PWCTR3: u8 = 0xC2;
const PWCTR4: u8 = 0xC3;
const PWCTR5: u8 = 0xC4;
const VMCTR1: u8 = 0xC5;

// MADCTL flags
pub const MADCTL_MX: u8 = 0x40;
pub const MADCTL_MV: u8 = 0x20;

/// 16 bits per pixel
const COLMOD_RGB565: u8 = 0x05;

/// Power and frame-rate setup between sleep-out and orientation
const POWER_SEQUENCE: &[(u8, &[u8])] = &[
    (FRMCTR1, &[0x01, 0x2C, 0x2D]),
    (FRMCTR2, &[0x01, 0x2C, 0x2D]),
    (FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]),
    (INVCTR, &[0x07]),
    (PWCTR1, &[0xA2, 0x02, 0x84]),
    (PWCTR2, &[0xC5]),
    (PWCTR3, &[0x0A, 0x00]),
    (PWCTR4, &[0x8A, 0x2A]),
    (PWCTR5, &[0x8A, 0xEE]),
    (VMCTR1, &[0x0E]),
];

/// Panel geometry and orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct St7735Config {
    /// Visible size after rotation
    pub width: u16,
    pub height: u16,
    /// Offset of the visible area inside controller RAM
    pub x_offset: u16,
    pub y_offset: u16,
    /// Memory access control byte (rotation and colour order)
    pub madctl: u8,
    /// Panel needs colour inversion
    pub invert: bool,
}

impl Default for St7735Config {
    /// 1.8" 160x128 module in landscape
    fn default() -> Self {
        Self {
            width: 160,
            height: 128,
            x_offset: 0,
            y_offset: 0,
            madctl: MADCTL_MX | MADCTL_MV,
            invert: false,
        }
    }
}

/// ST7735 driver
pub struct St7735<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    config: St7735Config,
}

impl<SPI, DC, RST> St7735<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, config: St7735Config) -> Self {
        Self { spi, dc, rst, config }
    }

    pub fn config(&self) -> &St7735Config {
        &self.config
    }

    /// Hardware reset followed by the controller init sequence
    ///
    /// Leaves the panel on, in RGB565 mode, with undefined RAM content.
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::Communication)?;
        delay.delay_ms(1).await;
        self.rst.set_low().map_err(|_| DisplayError::Communication)?;
        delay.delay_ms(10).await;
        self.rst.set_high().map_err(|_| DisplayError::Communication)?;
        delay.delay_ms(120).await;

        self.command(SWRESET, &[])?;
        delay.delay_ms(150).await;
        self.command(SLPOUT, &[])?;
        delay.delay_ms(120).await;

        for (cmd, params) in POWER_SEQUENCE {
            self.command(*cmd, params)?;
        }

        self.command(if self.config.invert { INVON } else { INVOFF }, &[])?;
        self.command(MADCTL, &[self.config.madctl])?;
        self.command(COLMOD, &[COLMOD_RGB565])?;

        self.command(NORON, &[])?;
        delay.delay_ms(10).await;
        self.command(DISPON, &[])?;
        delay.delay_ms(100).await;
        Ok(())
    }

    /// Send a command byte (DC low) followed by its parameters (DC high)
    fn command(&mut self, cmd: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Communication)?;
        self.spi.write(&[cmd]).map_err(|_| DisplayError::Communication)?;
        if !params.is_empty() {
            self.data(params)?;
        }
        Ok(())
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Communication)?;
        self.spi.write(bytes).map_err(|_| DisplayError::Communication)
    }
}

impl<SPI, DC, RST> DisplaySurface for St7735<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn size(&self) -> (u16, u16) {
        (self.config.width, self.config.height)
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        if x0 > x1 || y0 > y1 || x1 >= self.config.width || y1 >= self.config.height {
            return Err(DisplayError::OutOfBounds);
        }
        let (xo, yo) = (self.config.x_offset, self.config.y_offset);
        let [xs_hi, xs_lo] = (x0 + xo).to_be_bytes();
        let [xe_hi, xe_lo] = (x1 + xo).to_be_bytes();
        let [ys_hi, ys_lo] = (y0 + yo).to_be_bytes();
        let [ye_hi, ye_lo] = (y1 + yo).to_be_bytes();

        self.command(CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        self.command(RASET, &[ys_hi, ys_lo, ye_hi, ye_lo])?;
        self.command(RAMWR, &[])
    }

    fn write_pixels(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType as SpiErrorType, Operation};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Bus {
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
    }

    type Log = Rc<RefCell<Vec<Bus>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = ErrorKind;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Bus::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        is_dc: bool,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let event = if self.is_dc { Bus::Dc(false) } else { Bus::Rst(false) };
            self.log.borrow_mut().push(event);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            let event = if self.is_dc { Bus::Dc(true) } else { Bus::Rst(true) };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    struct MockDelay {
        total_ms: u32,
    }

    impl DelayNs for MockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
        }
    }

    type Panel = St7735<MockSpi, MockPin, MockPin>;

    fn panel() -> (Panel, Log) {
        let log: Log = Rc::default();
        let spi = MockSpi { log: log.clone(), fail: false };
        let dc = MockPin { log: log.clone(), is_dc: true };
        let rst = MockPin { log: log.clone(), is_dc: false };
        (St7735::new(spi, dc, rst, St7735Config::default()), log)
    }

    /// Commands written while DC was low
    fn commands(log: &Log) -> Vec<u8> {
        let mut dc = true;
        let mut out = Vec::new();
        for event in log.borrow().iter() {
            match event {
                Bus::Dc(level) => dc = *level,
                Bus::Write(bytes) if !dc => out.extend_from_slice(bytes),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_init_sequence() {
        let (mut panel, log) = panel();
        let mut delay = MockDelay { total_ms: 0 };
        block_on(panel.init(&mut delay)).unwrap();

        let log_ref = log.borrow();
        assert_eq!(&log_ref[..3], &[Bus::Rst(true), Bus::Rst(false), Bus::Rst(true)]);
        drop(log_ref);

        let cmds = commands(&log);
        assert_eq!(cmds.first(), Some(&SWRESET));
        assert_eq!(cmds[1], SLPOUT);
        assert!(cmds.contains(&COLMOD));
        assert_eq!(cmds.last(), Some(&DISPON));
        assert!(delay.total_ms >= 400);
    }

    #[test]
    fn test_madctl_and_colmod_parameters() {
        let (mut panel, log) = panel();
        block_on(panel.init(&mut MockDelay { total_ms: 0 })).unwrap();

        let log = log.borrow();
        let madctl_at = log
            .iter()
            .position(|e| *e == Bus::Write(vec![MADCTL]))
            .unwrap();
        assert_eq!(log[madctl_at + 1], Bus::Dc(true));
        assert_eq!(log[madctl_at + 2], Bus::Write(vec![MADCTL_MX | MADCTL_MV]));

        let colmod_at = log
            .iter()
            .position(|e| *e == Bus::Write(vec![COLMOD]))
            .unwrap();
        assert_eq!(log[colmod_at + 2], Bus::Write(vec![0x05]));
    }

    #[test]
    fn test_window_then_pixels() {
        let (mut panel, log) = panel();
        panel.set_window(34, 74, 36, 76).unwrap();
        panel.write_pixels(&[0xF8, 0x0C]).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Bus::Dc(false),
                Bus::Write(vec![CASET]),
                Bus::Dc(true),
                Bus::Write(vec![0, 34, 0, 36]),
                Bus::Dc(false),
                Bus::Write(vec![RASET]),
                Bus::Dc(true),
                Bus::Write(vec![0, 74, 0, 76]),
                Bus::Dc(false),
                Bus::Write(vec![RAMWR]),
                Bus::Dc(true),
                Bus::Write(vec![0xF8, 0x0C]),
            ]
        );
    }

    #[test]
    fn test_window_offsets_applied() {
        let log: Log = Rc::default();
        let config = St7735Config { x_offset: 1, y_offset: 2, ..St7735Config::default() };
        let mut panel = St7735::new(
            MockSpi { log: log.clone(), fail: false },
            MockPin { log: log.clone(), is_dc: true },
            MockPin { log: log.clone(), is_dc: false },
            config,
        );
        panel.set_window(0, 0, 159, 127).unwrap();
        assert_eq!(log.borrow()[3], Bus::Write(vec![0, 1, 0, 160]));
        assert_eq!(log.borrow()[7], Bus::Write(vec![0, 2, 0, 129]));
    }

    #[test]
    fn test_window_out_of_bounds() {
        let (mut panel, log) = panel();
        assert_eq!(panel.set_window(0, 0, 160, 10), Err(DisplayError::OutOfBounds));
        assert_eq!(panel.set_window(5, 0, 4, 10), Err(DisplayError::OutOfBounds));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let log: Log = Rc::default();
        let spi = MockSpi { log: log.clone(), fail: true };
        let dc = MockPin { log: log.clone(), is_dc: true };
        let rst = MockPin { log, is_dc: false };
        let mut panel = St7735::new(spi, dc, rst, St7735Config::default());
        assert_eq!(panel.write_pixels(&[0, 0]), Err(DisplayError::Communication));
    }
}
