//! Build script for joylink-firmware
//!
//! - Passes the esp-hal and defmt linker scripts
//! - Validates device.toml at compile time

use std::fs;
use std::path::Path;

/// Longest name that fits a legacy advertising payload next to flags and TX power
const MAX_NAME_LEN: usize = 23;

/// Largest panel edge the ST7735 family can address
const MAX_PANEL_DIM: i64 = 320;

fn main() {
    setup_linker();
    validate_config();
}

fn setup_linker() {
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds device.toml from the joylink-firmware       ║\n\
            ║  directory. Restore it or create one with a [device] section.    ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_device(&config, &mut errors);
    let (width, height) = validate_display(&config, &mut errors);
    for panel in ["left", "right"] {
        validate_panel(&config, panel, width, height, &mut errors);
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml validation failed                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }

    println!("cargo:warning=device.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };
    for (name, value) in table {
        match name.as_str() {
            "device" | "display" | "left" | "right" => {
                if !value.is_table() {
                    errors.push(format!("[{}] must be a section", name));
                }
            }
            other => errors.push(format!("unknown section [{}]", other)),
        }
    }
}

fn validate_device(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(device) = config.get("device").and_then(|v| v.as_table()) else {
        return;
    };
    for (key, value) in device {
        match key.as_str() {
            "name" => match value.as_str() {
                Some("") => errors.push("device.name must not be empty".to_string()),
                Some(name) if !name.is_ascii() => {
                    errors.push("device.name must be ASCII".to_string())
                }
                Some(name) if name.len() > MAX_NAME_LEN => errors.push(format!(
                    "device.name is {} bytes, limit is {}",
                    name.len(),
                    MAX_NAME_LEN
                )),
                Some(_) => {}
                None => errors.push("device.name must be a string".to_string()),
            },
            "tick_ms" => check_int(value, "device.tick_ms", 1, 1000, errors),
            other => errors.push(format!("unknown key device.{}", other)),
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) -> (i64, i64) {
    let mut width = 160;
    let mut height = 128;
    let Some(display) = config.get("display").and_then(|v| v.as_table()) else {
        return (width, height);
    };
    for (key, value) in display {
        match key.as_str() {
            "width" => {
                check_int(value, "display.width", 1, MAX_PANEL_DIM, errors);
                width = value.as_integer().unwrap_or(width);
            }
            "height" => {
                check_int(value, "display.height", 1, MAX_PANEL_DIM, errors);
                height = value.as_integer().unwrap_or(height);
            }
            "background" | "foreground" | "outline" => {
                check_int(value, &format!("display.{}", key), 0, 0xFFFF, errors)
            }
            other => errors.push(format!("unknown key display.{}", other)),
        }
    }
    (width, height)
}

fn validate_panel(
    config: &toml::Value,
    name: &str,
    width: i64,
    height: i64,
    errors: &mut Vec<String>,
) {
    let Some(panel) = config.get(name).and_then(|v| v.as_table()) else {
        return;
    };
    for (key, value) in panel {
        let path = format!("{}.{}", name, key);
        match key.as_str() {
            "anchor_x" => check_int(value, &path, 0, width - 1, errors),
            "anchor_y" => check_int(value, &path, 0, height - 1, errors),
            "size" => check_int(value, &path, 1, MAX_PANEL_DIM, errors),
            "invert_x" => {
                if !value.is_bool() {
                    errors.push(format!("{} must be true or false", path));
                }
            }
            "label_color" | "pressed_color" | "released_color" => {
                check_int(value, &path, 0, 0xFFFF, errors)
            }
            other => errors.push(format!("unknown key {}.{}", name, other)),
        }
    }
}

fn check_int(value: &toml::Value, path: &str, min: i64, max: i64, errors: &mut Vec<String>) {
    match value.as_integer() {
        Some(v) if (min..=max).contains(&v) => {}
        Some(v) => errors.push(format!("{} = {} is outside {}..={}", path, v, min, max)),
        None => errors.push(format!("{} must be an integer", path)),
    }
}
