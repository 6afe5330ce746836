//! Dashboard layout and per-tick rendering
//!
//! The dashboard owns every rendered field. It is created once by the
//! sampling loop and lives for the whole run.

use joylink_protocol::RawSample;

use super::field::{decimal, MarkerField, TextField};
use super::painter::{Painter, MARKER_RADIUS};
use crate::config::{DeviceConfig, DisplayConfig, PanelConfig};
use crate::mapper::{map_sample, Stick};
use crate::traits::DisplayError;

/// Clearance between marker travel and the region outline
const OUTLINE_GAP: u16 = 1;

/// What one tick actually wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderStats {
    pub texts: u8,
    pub markers: u8,
}

impl RenderStats {
    pub const fn total(&self) -> u8 {
        self.texts + self.markers
    }

    pub const fn is_idle(&self) -> bool {
        self.total() == 0
    }
}

/// Switch field text: `+` while held (reads 0), `-` otherwise
pub const fn switch_text(sample: &RawSample) -> &'static str {
    if sample.is_pressed() {
        "+"
    } else {
        "-"
    }
}

/// Rendering context for both joysticks
#[derive(Debug, Clone)]
pub struct Dashboard {
    display: DisplayConfig,
    left: PanelConfig,
    right: PanelConfig,
    x1: TextField,
    y1: TextField,
    sw: TextField,
    x2: TextField,
    y2: TextField,
    left_marker: MarkerField,
    right_marker: MarkerField,
}

impl Dashboard {
    pub fn new(config: &DeviceConfig) -> Self {
        let d = config.display;
        let (left, right) = (config.left, config.right);
        Self {
            display: d,
            left,
            right,
            x1: TextField::new(left.value_x, d.row_x),
            y1: TextField::new(left.value_x, d.row_y),
            sw: TextField::new(left.value_x, d.row_switch),
            x2: TextField::new(right.value_x, d.row_x),
            y2: TextField::new(right.value_x, d.row_y),
            left_marker: MarkerField::new(),
            right_marker: MarkerField::new(),
        }
    }

    /// Clear the panel and draw labels and marker region outlines
    ///
    /// Also forgets every field so the next [`render`](Self::render)
    /// repaints all values onto the fresh background.
    pub fn draw_static<P: Painter>(&mut self, painter: &mut P) -> Result<(), DisplayError> {
        let d = self.display;
        painter.clear(d.background)?;

        for panel in [&self.left, &self.right] {
            painter.draw_text(panel.label_x, d.row_x, "X:", panel.label_color, d.background)?;
            painter.draw_text(panel.label_x, d.row_y, "Y:", panel.label_color, d.background)?;
            if let Some(x) = panel.switch_label_x {
                painter.draw_text(x, d.row_switch, "SW:", panel.label_color, d.background)?;
            }

            let half = (panel.size / 2)
                .saturating_add(MARKER_RADIUS)
                .saturating_add(OUTLINE_GAP);
            let side = half.saturating_mul(2).saturating_add(1);
            painter.draw_outline(
                panel.anchor_x.saturating_sub(half),
                panel.anchor_y.saturating_sub(half),
                side,
                side,
                d.outline,
            )?;
        }

        self.invalidate();
        Ok(())
    }

    /// Bring the panel in line with `sample`, touching only changed fields
    pub fn render<P: Painter>(
        &mut self,
        painter: &mut P,
        sample: &RawSample,
    ) -> Result<RenderStats, DisplayError> {
        let fg = self.display.foreground;
        let bg = self.display.background;
        let mut stats = RenderStats::default();

        let texts = [
            (&mut self.x1, decimal(sample.x1())),
            (&mut self.y1, decimal(sample.y1())),
            (&mut self.x2, decimal(sample.x2())),
            (&mut self.y2, decimal(sample.y2())),
        ];
        for (field, text) in texts {
            stats.texts += u8::from(field.update(painter, &text, fg, bg)?);
        }
        stats.texts += u8::from(self.sw.update(painter, switch_text(sample), fg, bg)?);

        let (w, h) = (self.display.width, self.display.height);
        let left = map_sample(sample, Stick::Left, &self.left.anchor(), w, h);
        let right = map_sample(sample, Stick::Right, &self.right.anchor(), w, h);

        let left_color = self.left.marker_color(sample.sw());
        let right_color = self.right.marker_color(sample.sw());
        stats.markers += u8::from(self.left_marker.update(painter, left, left_color, bg)?);
        stats.markers += u8::from(self.right_marker.update(painter, right, right_color, bg)?);

        Ok(stats)
    }

    /// Forget all on-screen state
    pub fn invalidate(&mut self) {
        for field in [&mut self.x1, &mut self.y1, &mut self.sw, &mut self.x2, &mut self.y2] {
            field.invalidate();
        }
        self.left_marker.invalidate();
        self.right_marker.invalidate();
    }
}
