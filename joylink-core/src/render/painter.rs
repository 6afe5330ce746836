//! Drawing primitives on top of a [`DisplaySurface`]
//!
//! [`Painter`] is the seam the differential renderer draws through.
//! [`Canvas`] is the production implementation; it turns every primitive
//! into one address window plus a pixel stream.

use super::font::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::mapper::ScreenPoint;
use crate::traits::{DisplayError, DisplaySurface, Rgb565};

/// Half the side of the square marker block
pub const MARKER_RADIUS: u16 = 1;

/// Drawing operations used by the dashboard
pub trait Painter {
    /// Panel size as (width, height)
    fn size(&self) -> (u16, u16);

    /// Fill a rectangle, clipped to the panel
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565)
        -> Result<(), DisplayError>;

    /// Draw `text` with its top-left corner at (x, y)
    ///
    /// Each glyph cell is fully painted, `bg` where the glyph has no ink.
    /// Glyphs that do not fit entirely on the panel are dropped.
    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Draw the square marker block centred on `point`
    fn draw_marker(&mut self, point: ScreenPoint, color: Rgb565) -> Result<(), DisplayError>;

    /// Fill the whole panel
    fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        let (w, h) = self.size();
        self.fill_rect(0, 0, w, h, color)
    }

    /// One-pixel rectangle outline
    fn draw_outline(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        self.fill_rect(x, y, w, 1, color)?;
        self.fill_rect(x, bottom, w, 1, color)?;
        self.fill_rect(x, y, 1, h, color)?;
        self.fill_rect(right, y, 1, h, color)
    }
}

/// Pixels per streamed chunk in `fill_rect`
const FILL_CHUNK: usize = 32;

/// Painter over any pixel-addressable surface
pub struct Canvas<S> {
    surface: S,
}

impl<S: DisplaySurface> Canvas<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Access the underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_inner(self) -> S {
        self.surface
    }
}

impl<S: DisplaySurface> Painter for Canvas<S> {
    fn size(&self) -> (u16, u16) {
        self.surface.size()
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let (width, height) = self.surface.size();
        if w == 0 || h == 0 || x >= width || y >= height {
            return Ok(());
        }
        let x1 = x.saturating_add(w - 1).min(width - 1);
        let y1 = y.saturating_add(h - 1).min(height - 1);

        self.surface.set_window(x, y, x1, y1)?;

        let mut chunk = [0u8; FILL_CHUNK * 2];
        for px in chunk.chunks_exact_mut(2) {
            px.copy_from_slice(&color.to_be_bytes());
        }

        let mut remaining = u32::from(x1 - x + 1) * u32::from(y1 - y + 1);
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK as u32);
            self.surface.write_pixels(&chunk[..n as usize * 2])?;
            remaining -= n;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError> {
        let (width, height) = self.surface.size();
        if y.saturating_add(GLYPH_HEIGHT) > height {
            return Ok(());
        }

        let fg = fg.to_be_bytes();
        let bg = bg.to_be_bytes();
        let mut cell = [0u8; (GLYPH_WIDTH * GLYPH_HEIGHT * 2) as usize];
        let mut cx = x;

        for c in text.chars() {
            if cx.saturating_add(GLYPH_WIDTH) > width {
                break;
            }
            let rows = glyph(c);
            for (r, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH as usize {
                    let px = if bits & (1 << col) != 0 { fg } else { bg };
                    let at = (r * GLYPH_WIDTH as usize + col) * 2;
                    cell[at..at + 2].copy_from_slice(&px);
                }
            }
            self.surface
                .set_window(cx, y, cx + GLYPH_WIDTH - 1, y + GLYPH_HEIGHT - 1)?;
            self.surface.write_pixels(&cell)?;
            cx += GLYPH_WIDTH;
        }
        Ok(())
    }

    fn draw_marker(&mut self, point: ScreenPoint, color: Rgb565) -> Result<(), DisplayError> {
        let x0 = point.x.saturating_sub(MARKER_RADIUS);
        let y0 = point.y.saturating_sub(MARKER_RADIUS);
        let x1 = point.x.saturating_add(MARKER_RADIUS);
        let y1 = point.y.saturating_add(MARKER_RADIUS);
        self.fill_rect(x0, y0, x1 - x0 + 1, y1 - y0 + 1, color)
    }
}
