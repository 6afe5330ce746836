//! Marker placement math
//!
//! All scaling uses integer truncation in the order
//! `anchor + raw * size / max - size / 2`, evaluated in `i32` so the
//! intermediate product cannot overflow for 12-bit inputs.

use joylink_protocol::{RawSample, ANALOG_MAX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel position guaranteed to lie on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenPoint {
    pub x: u16,
    pub y: u16,
}

impl ScreenPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Fixed geometry of one marker region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerAnchor {
    /// Region centre
    pub x: u16,
    pub y: u16,
    /// Region side length
    pub size: u16,
    /// Substitute `max - raw_x` for `raw_x`
    pub invert_x: bool,
}

/// Which stick of the pair a mapping refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stick {
    Left,
    Right,
}

/// Map one raw axis pair into the marker region of `anchor`
///
/// `max_val` is the full-scale raw reading; inputs above it are treated
/// as full scale. The result is clamped independently per axis to
/// `[0, width - 1] x [0, height - 1]`.
pub fn map(
    raw_x: u16,
    raw_y: u16,
    anchor: &MarkerAnchor,
    max_val: u16,
    width: u16,
    height: u16,
) -> ScreenPoint {
    let raw_x = raw_x.min(max_val);
    let raw_y = raw_y.min(max_val);
    let raw_x = if anchor.invert_x { max_val - raw_x } else { raw_x };

    let x = scale(anchor.x, raw_x, anchor.size, max_val);
    let y = scale(anchor.y, raw_y, anchor.size, max_val);

    ScreenPoint {
        x: clamp_axis(x, width),
        y: clamp_axis(y, height),
    }
}

/// Map the stick selected by `stick` out of a full sample
pub fn map_sample(
    sample: &RawSample,
    stick: Stick,
    anchor: &MarkerAnchor,
    width: u16,
    height: u16,
) -> ScreenPoint {
    let (raw_x, raw_y) = match stick {
        Stick::Left => (sample.x1(), sample.y1()),
        Stick::Right => (sample.x2(), sample.y2()),
    };
    map(raw_x, raw_y, anchor, ANALOG_MAX, width, height)
}

fn scale(anchor: u16, raw: u16, size: u16, max_val: u16) -> i32 {
    let size = i32::from(size);
    let offset = match max_val {
        0 => 0,
        max => i32::from(raw) * size / i32::from(max),
    };
    i32::from(anchor) + offset - size / 2
}

fn clamp_axis(v: i32, extent: u16) -> u16 {
    let upper = i32::from(extent.saturating_sub(1));
    // `v.clamp(0, upper)` is within u16 by construction
    v.clamp(0, upper) as u16
}
