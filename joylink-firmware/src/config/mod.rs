//! Device configuration
//!
//! `device.toml` is compiled into the image. build.rs already rejected
//! anything the host-side TOML check can see; the on-target parser is the
//! final word and falls back to the stock configuration on any error.

use defmt::*;

use joylink_core::config::{parse_config, DeviceConfig};

/// Embedded configuration (edit device.toml and rebuild to customize)
const EMBEDDED_CONFIG: &str = include_str!("../../device.toml");

/// Parse the embedded file, or fall back to the stock configuration
pub fn load() -> DeviceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config loaded: name={=str} tick={}ms panel={}x{}",
                config.device.name.as_str(),
                config.device.tick_ms,
                config.display.width,
                config.display.height
            );
            config
        }
        Err(failure) => {
            warn!(
                "device.toml line {}: {}, using stock configuration",
                failure.line, failure.error
            );
            DeviceConfig::default()
        }
    }
}
