//! Configuration type definitions
//!
//! `Default` reproduces the stock JoyLink board: a 160x128 panel with the
//! left stick drawn at (35,75) and the right stick at (120,75).

use heapless::String;
use joylink_protocol::gatt::{DEFAULT_DEVICE_NAME, MAX_DEVICE_NAME_LEN};

use crate::mapper::MarkerAnchor;
use crate::traits::Rgb565;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Shortest sampling period accepted
pub const MIN_TICK_MS: u16 = 1;

/// Longest sampling period accepted
pub const MAX_TICK_MS: u16 = 1000;

/// Largest panel dimension accepted (ST7735 family)
pub const MAX_PANEL_DIM: u16 = 320;

/// Identity and timing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceSettings {
    /// Advertised complete local name
    pub name: String<MAX_DEVICE_NAME_LEN>,
    /// Sampling and render period in milliseconds
    pub tick_ms: u16,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        let mut name = String::new();
        // Fits: the default name is shorter than the advertising limit.
        let _ = name.push_str(DEFAULT_DEVICE_NAME);
        Self { name, tick_ms: 20 }
    }
}

/// Panel geometry, shared colours and text rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
    /// Clear colour, also used to erase
    pub background: Rgb565,
    /// Value text colour
    pub foreground: Rgb565,
    /// Marker region outline colour
    pub outline: Rgb565,
    /// Baseline of the X value row
    pub row_x: u16,
    /// Baseline of the Y value row
    pub row_y: u16,
    /// Baseline of the switch row
    pub row_switch: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 128,
            background: Rgb565::BLACK,
            foreground: Rgb565::WHITE,
            outline: Rgb565::WHITE,
            row_x: 15,
            row_y: 25,
            row_switch: 35,
        }
    }
}

/// Layout and palette for one joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Centre of the marker region
    pub anchor_x: u16,
    pub anchor_y: u16,
    /// Side of the square marker region
    pub size: u16,
    /// Mirror the horizontal axis
    pub invert_x: bool,
    /// Static label colour
    pub label_color: Rgb565,
    /// Marker colour while the switch is held
    pub pressed_color: Rgb565,
    /// Marker colour while the switch is released
    pub released_color: Rgb565,
    /// Column of the `X:`/`Y:` labels
    pub label_x: u16,
    /// Column of the value text
    pub value_x: u16,
    /// Column of the `SW:` label, `None` if this panel has no switch row
    pub switch_label_x: Option<u16>,
}

impl PanelConfig {
    /// Stock left panel (carries the switch row)
    pub const fn left() -> Self {
        Self {
            anchor_x: 35,
            anchor_y: 75,
            size: 50,
            invert_x: true,
            label_color: Rgb565(0x06DB),
            pressed_color: Rgb565(0xF80C),
            released_color: Rgb565(0x06DB),
            label_x: 14,
            value_x: 30,
            switch_label_x: Some(5),
        }
    }

    /// Stock right panel
    pub const fn right() -> Self {
        Self {
            anchor_x: 120,
            anchor_y: 75,
            size: 50,
            invert_x: true,
            label_color: Rgb565(0x07E0),
            pressed_color: Rgb565(0x07E0),
            released_color: Rgb565(0x07E0),
            label_x: 100,
            value_x: 120,
            switch_label_x: None,
        }
    }

    /// Marker geometry for the mapper
    pub const fn anchor(&self) -> MarkerAnchor {
        MarkerAnchor {
            x: self.anchor_x,
            y: self.anchor_y,
            size: self.size,
            invert_x: self.invert_x,
        }
    }

    /// Marker colour for a switch level (0 = held, pull-up wiring)
    pub const fn marker_color(&self, sw: u8) -> Rgb565 {
        if sw == 0 {
            self.pressed_color
        } else {
            self.released_color
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub device: DeviceSettings,
    pub display: DisplayConfig,
    pub left: PanelConfig,
    pub right: PanelConfig,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceConfig {
    /// Stock configuration
    pub fn new() -> Self {
        Self {
            device: DeviceSettings::default(),
            display: DisplayConfig::default(),
            left: PanelConfig::left(),
            right: PanelConfig::right(),
        }
    }

    /// Check cross-field constraints that single-key parsing cannot see
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        if d.width == 0 || d.height == 0 || d.width > MAX_PANEL_DIM || d.height > MAX_PANEL_DIM {
            return Err(ConfigError::OutOfRange);
        }
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.device.tick_ms) {
            return Err(ConfigError::OutOfRange);
        }
        if self.device.name.is_empty() {
            return Err(ConfigError::InvalidValue);
        }
        for panel in [&self.left, &self.right] {
            if panel.size == 0 || panel.size > MAX_PANEL_DIM {
                return Err(ConfigError::OutOfRange);
            }
            if panel.anchor_x >= d.width || panel.anchor_y >= d.height {
                return Err(ConfigError::OutOfRange);
            }
            if panel.value_x >= d.width || panel.label_x >= d.width {
                return Err(ConfigError::OutOfRange);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_defaults() {
        let config = DeviceConfig::default();
        assert_eq!(config.device.name.as_str(), "JoyLink");
        assert_eq!(config.device.tick_ms, 20);
        assert_eq!((config.display.width, config.display.height), (160, 128));
        assert_eq!(config.left.anchor(), MarkerAnchor { x: 35, y: 75, size: 50, invert_x: true });
        assert_eq!(config.right.anchor(), MarkerAnchor { x: 120, y: 75, size: 50, invert_x: true });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_marker_color_follows_switch() {
        let left = PanelConfig::left();
        assert_eq!(left.marker_color(0), Rgb565(0xF80C));
        assert_eq!(left.marker_color(1), Rgb565(0x06DB));

        let right = PanelConfig::right();
        assert_eq!(right.marker_color(0), Rgb565(0x07E0));
        assert_eq!(right.marker_color(1), Rgb565(0x07E0));
    }

    #[test]
    fn test_validate_rejects_anchor_off_panel() {
        let mut config = DeviceConfig::new();
        config.right.anchor_x = 160;
        assert_eq!(config.validate(), Err(ConfigError::OutOfRange));
    }

    #[test]
    fn test_validate_rejects_oversized_region() {
        let mut config = DeviceConfig::new();
        config.left.size = MAX_PANEL_DIM;
        assert!(config.validate().is_ok());
        config.left.size = MAX_PANEL_DIM + 1;
        assert_eq!(config.validate(), Err(ConfigError::OutOfRange));
        config.left.size = u16::MAX;
        assert_eq!(config.validate(), Err(ConfigError::OutOfRange));
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let mut config = DeviceConfig::new();
        config.device.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::OutOfRange));
    }
}
