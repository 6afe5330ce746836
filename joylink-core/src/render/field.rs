//! Rendered fields
//!
//! A field pairs a fixed screen position with the last value drawn there.
//! Fields start unset so the first update always draws.

use core::fmt::Write;

use heapless::String;

use super::painter::Painter;
use crate::mapper::ScreenPoint;
use crate::traits::{DisplayError, Rgb565};

/// Longest text a field holds; longer input is truncated
pub const FIELD_CHARS: usize = 8;

/// Bounded field text
pub type FieldText = String<FIELD_CHARS>;

/// Copy `text` into a field buffer, dropping whatever does not fit
pub fn bounded(text: &str) -> FieldText {
    let mut out = FieldText::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Decimal rendering of a reading
pub fn decimal(value: u16) -> FieldText {
    let mut out = FieldText::new();
    // u16::MAX is five digits, always fits
    let _ = write!(out, "{}", value);
    out
}

/// Fixed-position text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    x: u16,
    y: u16,
    last: Option<FieldText>,
}

impl TextField {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y, last: None }
    }

    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Text currently on screen, `None` before the first draw
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Forget what was drawn so the next update redraws
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Redraw if `text` differs from what is on screen
    ///
    /// Returns `Ok(true)` when the panel was written. On error the stored
    /// text is left untouched so the next tick retries.
    pub fn update<P: Painter>(
        &mut self,
        painter: &mut P,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<bool, DisplayError> {
        let text = bounded(text);
        if self.last.as_ref() == Some(&text) {
            return Ok(false);
        }

        if let Some(old) = &self.last {
            painter.draw_text(self.x, self.y, old, bg, bg)?;
        }
        painter.draw_text(self.x, self.y, &text, fg, bg)?;
        self.last = Some(text);
        Ok(true)
    }
}

/// Joystick position marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerField {
    last: Option<(ScreenPoint, Rgb565)>,
}

impl MarkerField {
    pub const fn new() -> Self {
        Self { last: None }
    }

    pub fn last(&self) -> Option<(ScreenPoint, Rgb565)> {
        self.last
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Move or recolour the marker if either changed
    pub fn update<P: Painter>(
        &mut self,
        painter: &mut P,
        point: ScreenPoint,
        color: Rgb565,
        bg: Rgb565,
    ) -> Result<bool, DisplayError> {
        if self.last == Some((point, color)) {
            return Ok(false);
        }

        if let Some((old, _)) = self.last {
            painter.draw_marker(old, bg)?;
        }
        painter.draw_marker(point, color)?;
        self.last = Some((point, color));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{Op, RecordingPainter};

    const FG: Rgb565 = Rgb565::WHITE;
    const BG: Rgb565 = Rgb565::BLACK;

    #[test]
    fn test_first_update_draws_without_erase() {
        let mut painter = RecordingPainter::new();
        let mut field = TextField::new(30, 15);
        assert_eq!(field.update(&mut painter, "2048", FG, BG), Ok(true));
        assert_eq!(painter.texts(), vec![(30, 15, "2048", FG, BG)]);
        assert_eq!(field.last(), Some("2048"));
    }

    #[test]
    fn test_same_text_is_idempotent() {
        let mut painter = RecordingPainter::new();
        let mut field = TextField::new(30, 15);
        field.update(&mut painter, "2048", FG, BG).unwrap();
        painter.ops.clear();

        assert_eq!(field.update(&mut painter, "2048", FG, BG), Ok(false));
        assert_eq!(field.update(&mut painter, "2048", FG, BG), Ok(false));
        assert!(painter.ops.is_empty());
    }

    #[test]
    fn test_change_is_one_erase_one_draw() {
        let mut painter = RecordingPainter::new();
        let mut field = TextField::new(120, 25);
        field.update(&mut painter, "4095", FG, BG).unwrap();
        painter.ops.clear();

        assert_eq!(field.update(&mut painter, "7", FG, BG), Ok(true));
        assert_eq!(
            painter.texts(),
            vec![(120, 25, "4095", BG, BG), (120, 25, "7", FG, BG)]
        );
    }

    #[test]
    fn test_failed_draw_keeps_old_text() {
        let mut painter = RecordingPainter::new();
        let mut field = TextField::new(30, 35);
        field.update(&mut painter, "-", FG, BG).unwrap();

        // erase succeeds, draw fails
        painter.fail_after = Some(2);
        assert_eq!(
            field.update(&mut painter, "+", FG, BG),
            Err(DisplayError::Communication)
        );
        assert_eq!(field.last(), Some("-"));

        painter.fail_after = None;
        assert_eq!(field.update(&mut painter, "+", FG, BG), Ok(true));
        assert_eq!(field.last(), Some("+"));
    }

    #[test]
    fn test_long_text_truncated() {
        let mut painter = RecordingPainter::new();
        let mut field = TextField::new(0, 0);
        field.update(&mut painter, "0123456789", FG, BG).unwrap();
        assert_eq!(field.last(), Some("01234567"));
        // comparison happens after truncation
        assert_eq!(field.update(&mut painter, "01234567xx", FG, BG), Ok(false));
    }

    #[test]
    fn test_invalidate_forces_redraw() {
        let mut painter = RecordingPainter::new();
        let mut field = TextField::new(0, 0);
        field.update(&mut painter, "1", FG, BG).unwrap();
        field.invalidate();
        painter.ops.clear();
        field.update(&mut painter, "1", FG, BG).unwrap();
        assert_eq!(painter.texts(), vec![(0, 0, "1", FG, BG)]);
    }

    #[test]
    fn test_marker_moves_with_erase() {
        let mut painter = RecordingPainter::new();
        let mut marker = MarkerField::new();
        let a = ScreenPoint::new(35, 75);
        let b = ScreenPoint::new(36, 75);

        marker.update(&mut painter, a, Rgb565(0x06DB), BG).unwrap();
        assert_eq!(marker.update(&mut painter, a, Rgb565(0x06DB), BG), Ok(false));
        marker.update(&mut painter, b, Rgb565(0x06DB), BG).unwrap();

        assert_eq!(
            painter.ops,
            vec![
                Op::Marker { point: a, color: Rgb565(0x06DB) },
                Op::Marker { point: a, color: BG },
                Op::Marker { point: b, color: Rgb565(0x06DB) },
            ]
        );
    }

    #[test]
    fn test_marker_recolours_in_place() {
        let mut painter = RecordingPainter::new();
        let mut marker = MarkerField::new();
        let p = ScreenPoint::new(35, 75);
        marker.update(&mut painter, p, Rgb565(0x06DB), BG).unwrap();
        assert_eq!(marker.update(&mut painter, p, Rgb565(0xF80C), BG), Ok(true));
        assert_eq!(marker.last(), Some((p, Rgb565(0xF80C))));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal(0).as_str(), "0");
        assert_eq!(decimal(4095).as_str(), "4095");
    }
}
