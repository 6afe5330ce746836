//! 8x8 bitmap font
//!
//! Only the glyphs the dashboard can show are present. Each glyph is eight
//! row bytes, top row first; bit 0 of a row is its leftmost pixel.
//! Characters without a glyph render as blank cells.

pub const GLYPH_WIDTH: u16 = 8;
pub const GLYPH_HEIGHT: u16 = 8;

const BLANK: [u8; 8] = [0x00; 8];

const DIGITS: [[u8; 8]; 10] = [
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // 9
];

const PLUS: [u8; 8] = [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00];
const COMMA: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06];
const MINUS: [u8; 8] = [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00];
const COLON: [u8; 8] = [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00];
const S: [u8; 8] = [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00];
const W: [u8; 8] = [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00];
const X: [u8; 8] = [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00];
const Y: [u8; 8] = [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00];

/// Bitmap for `c`
pub fn glyph(c: char) -> &'static [u8; 8] {
    match c {
        '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        '+' => &PLUS,
        ',' => &COMMA,
        '-' => &MINUS,
        ':' => &COLON,
        'S' => &S,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        _ => &BLANK,
    }
}
