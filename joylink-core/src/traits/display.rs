//! Panel surface trait
//!
//! The renderer never talks to a panel controller directly. It opens an
//! address window and streams pixels into it, which is the smallest
//! contract every SPI TFT controller we care about can satisfy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while pushing pixels to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or control pin failure
    Communication,
    /// Window lies (partly) outside the panel
    OutOfBounds,
}

/// 16-bit colour, 5 bits red, 6 bits green, 5 bits blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire order expected by the panel (high byte first)
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// Trait for a pixel-addressable panel
pub trait DisplaySurface {
    /// Panel size in pixels as (width, height)
    fn size(&self) -> (u16, u16);

    /// Select the inclusive rectangle that subsequent pixel writes fill
    ///
    /// Pixels are written row by row, left to right.
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError>;

    /// Stream big-endian RGB565 pixel data into the current window
    ///
    /// May be called several times per window; data continues where the
    /// previous call stopped.
    fn write_pixels(&mut self, data: &[u8]) -> Result<(), DisplayError>;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        (**self).set_window(x0, y0, x1, y1)
    }

    fn write_pixels(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        (**self).write_pixels(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_wire_order() {
        assert_eq!(Rgb565(0xF80C).to_be_bytes(), [0xF8, 0x0C]);
        assert_eq!(Rgb565::WHITE.to_be_bytes(), [0xFF, 0xFF]);
    }

    #[test]
    fn test_colour_from_raw() {
        let c: Rgb565 = 0x06DB.into();
        assert_eq!(c.raw(), 0x06DB);
    }
}
