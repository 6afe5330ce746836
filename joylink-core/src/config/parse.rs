//! Minimal parser for the embedded `device.toml`
//!
//! Handles only the subset the device file uses. It does NOT support the
//! full TOML grammar.
//!
//! Supported:
//! - `[device]`, `[display]`, `[left]`, `[right]` section headers
//! - `key = value` pairs with integer, boolean or quoted string values
//! - Integers in decimal or `0x` hex (colours are written as `0xF80C`)
//! - Comments (`# ...`), full-line or trailing
//!
//! Every key overlays the matching field of [`DeviceConfig::default`].
//! Keys that are absent keep their default.

use heapless::String;

use super::types::{DeviceConfig, PanelConfig};
use crate::traits::Rgb565;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or does not parse
    InvalidValue,
    /// Value parses but is outside the accepted range
    OutOfRange,
}

/// Parse error with its 1-based source line (0 for whole-file checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseFailure {
    pub line: u16,
    pub error: ConfigError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Device,
    Display,
    Left,
    Right,
}

/// Parse the device file on top of the stock configuration
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseFailure> {
    let mut config = DeviceConfig::new();
    let mut section = Section::Root;

    for (index, line) in input.lines().enumerate() {
        let line_no = u16::try_from(index + 1).unwrap_or(u16::MAX);
        let fail = |error| ParseFailure { line: line_no, error };

        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or(fail(ConfigError::InvalidSection))?;
            section = parse_section_header(name).map_err(fail)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(fail(ConfigError::InvalidValue))?;
        apply_value(section, key, value, &mut config).map_err(fail)?;
    }

    config
        .validate()
        .map_err(|error| ParseFailure { line: 0, error })?;
    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ConfigError> {
    match name.trim() {
        "device" => Ok(Section::Device),
        "display" => Ok(Section::Display),
        "left" => Ok(Section::Left),
        "right" => Ok(Section::Right),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Drop a trailing comment unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DeviceConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => Err(ConfigError::UnknownKey),
        Section::Device => match key {
            "name" => {
                let name = parse_string(value)?;
                config.device.name = String::try_from(name).map_err(|_| ConfigError::OutOfRange)?;
                Ok(())
            }
            "tick_ms" => {
                config.device.tick_ms = parse_int(value)?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey),
        },
        Section::Display => {
            let display = &mut config.display;
            match key {
                "width" => display.width = parse_int(value)?,
                "height" => display.height = parse_int(value)?,
                "background" => display.background = parse_color(value)?,
                "foreground" => display.foreground = parse_color(value)?,
                "outline" => display.outline = parse_color(value)?,
                _ => return Err(ConfigError::UnknownKey),
            }
            Ok(())
        }
        Section::Left => apply_panel(&mut config.left, key, value),
        Section::Right => apply_panel(&mut config.right, key, value),
    }
}

fn apply_panel(panel: &mut PanelConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "anchor_x" => panel.anchor_x = parse_int(value)?,
        "anchor_y" => panel.anchor_y = parse_int(value)?,
        "size" => panel.size = parse_int(value)?,
        "invert_x" => panel.invert_x = parse_bool(value)?,
        "label_color" => panel.label_color = parse_color(value)?,
        "pressed_color" => panel.pressed_color = parse_color(value)?,
        "released_color" => panel.released_color = parse_color(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

fn parse_string(value: &str) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Decimal or `0x` hex, range-checked into the target type
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ConfigError> {
    let raw = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|_| ConfigError::InvalidValue)?;
    T::try_from(raw).map_err(|_| ConfigError::OutOfRange)
}

fn parse_color(value: &str) -> Result<Rgb565, ConfigError> {
    parse_int::<u16>(value).map(Rgb565)
}
