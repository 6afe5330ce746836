//! Telemetry attribute text
//!
//! Encoding is infallible: every legal [`RawSample`] formats to at most 21
//! bytes (`4095,4095,4095,4095,1`), well inside the 31 byte attribute cap.
//! The cap is still enforced by [`truncate`] so a future field change can
//! only shorten the value, never overflow the transport buffer.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::sample::{RawSample, ANALOG_MAX};

/// Maximum attribute value length in bytes
pub const MAX_ATTRIBUTE_LEN: usize = 31;

/// Field separator
pub const FIELD_SEPARATOR: u8 = b',';

/// Number of fields in the attribute
const FIELD_COUNT: usize = 5;

/// Longest accepted decimal field when parsing
const MAX_FIELD_DIGITS: usize = 5;

/// Formatting scratch space, larger than the cap so truncation is observable
const SCRATCH_LEN: usize = 48;

/// Encoded attribute value
pub type TelemetryText = Vec<u8, MAX_ATTRIBUTE_LEN>;

/// Errors when parsing an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryError {
    /// No bytes at all
    Empty,
    /// Not exactly five comma separated fields
    FieldCount,
    /// A field is empty, too long or not plain decimal
    InvalidNumber,
    /// Analog field above 4095 or switch field not 0/1
    OutOfRange,
}

/// Format a sample as `x1,y1,x2,y2,sw`
pub fn encode(sample: &RawSample) -> TelemetryText {
    let mut scratch: String<SCRATCH_LEN> = String::new();
    // Five u16 fields plus separators cannot exceed the scratch buffer
    let _ = write!(
        scratch,
        "{},{},{},{},{}",
        sample.x1(),
        sample.y1(),
        sample.x2(),
        sample.y2(),
        sample.sw()
    );
    truncate(scratch.as_bytes())
}

/// Cut `text` to at most [`MAX_ATTRIBUTE_LEN`] bytes
///
/// The cut is a plain byte prefix. The attribute is ASCII so this never
/// splits a character.
pub fn truncate(text: &[u8]) -> TelemetryText {
    let len = text.len().min(MAX_ATTRIBUTE_LEN);
    let mut out = Vec::new();
    let _ = out.extend_from_slice(&text[..len]);
    out
}

/// Parse an attribute value back into a sample
///
/// Strict: exactly five fields, digits only, analog values within 12 bits
/// and a switch of 0 or 1.
pub fn parse(value: &[u8]) -> Result<RawSample, TelemetryError> {
    if value.is_empty() {
        return Err(TelemetryError::Empty);
    }

    let mut fields = [0u32; FIELD_COUNT];
    let mut count = 0;

    for field in value.split(|&b| b == FIELD_SEPARATOR) {
        if count == FIELD_COUNT {
            return Err(TelemetryError::FieldCount);
        }
        fields[count] = parse_field(field)?;
        count += 1;
    }

    if count != FIELD_COUNT {
        return Err(TelemetryError::FieldCount);
    }

    let [x1, y1, x2, y2, sw] = fields;
    let analog_ok = [x1, y1, x2, y2]
        .iter()
        .all(|&v| v <= u32::from(ANALOG_MAX));
    if !analog_ok || sw > 1 {
        return Err(TelemetryError::OutOfRange);
    }

    Ok(RawSample::new(
        x1 as u16, y1 as u16, x2 as u16, y2 as u16, sw as u8,
    ))
}

fn parse_field(field: &[u8]) -> Result<u32, TelemetryError> {
    if field.is_empty() || field.len() > MAX_FIELD_DIGITS {
        return Err(TelemetryError::InvalidNumber);
    }

    field.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(TelemetryError::InvalidNumber)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_reference_sample() {
        let sample = RawSample::new(100, 200, 300, 400, 1);
        assert_eq!(encode(&sample).as_slice(), b"100,200,300,400,1");
    }

    #[test]
    fn test_encode_centered_pressed() {
        let sample = RawSample::new(2048, 2048, 2048, 2048, 0);
        assert_eq!(encode(&sample).as_slice(), b"2048,2048,2048,2048,0");
    }

    #[test]
    fn test_encode_longest_value() {
        let sample = RawSample::new(4095, 4095, 4095, 4095, 1);
        let text = encode(&sample);
        assert_eq!(text.as_slice(), b"4095,4095,4095,4095,1");
        assert_eq!(text.len(), 21);
        assert!(text.len() <= MAX_ATTRIBUTE_LEN);
    }

    #[test]
    fn test_encode_field_order() {
        let sample = RawSample::new(1, 2, 3, 4, 0);
        assert_eq!(encode(&sample).as_slice(), b"1,2,3,4,0");
    }

    #[test]
    fn test_truncate_long_input() {
        let long = [b'9'; 40];
        let cut = truncate(&long);
        assert_eq!(cut.len(), MAX_ATTRIBUTE_LEN);
        assert!(cut.iter().all(|&b| b == b'9'));
    }

    #[test]
    fn test_truncate_boundaries() {
        assert_eq!(truncate(&[b'1'; 30]).len(), 30);
        assert_eq!(truncate(&[b'1'; 31]).len(), 31);
        assert_eq!(truncate(&[b'1'; 32]).len(), 31);
        assert!(truncate(b"").is_empty());
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let text = b"-4095,-4095,-4095,-4095,-1,-4095,-4095";
        assert_eq!(truncate(text).as_slice(), &text[..MAX_ATTRIBUTE_LEN]);
    }

    #[test]
    fn test_parse_reference_sample() {
        let sample = parse(b"100,200,300,400,1").unwrap();
        assert_eq!(sample, RawSample::new(100, 200, 300, 400, 1));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse(b""), Err(TelemetryError::Empty));
        assert_eq!(parse(b"1,2,3,4"), Err(TelemetryError::FieldCount));
        assert_eq!(parse(b"1,2,3,4,0,6"), Err(TelemetryError::FieldCount));
        assert_eq!(parse(b"1,2,,4,0"), Err(TelemetryError::InvalidNumber));
        assert_eq!(parse(b"1,2,-3,4,0"), Err(TelemetryError::InvalidNumber));
        assert_eq!(parse(b"1,2,+3,4,0"), Err(TelemetryError::InvalidNumber));
        assert_eq!(parse(b"1,2,3,400000,0"), Err(TelemetryError::InvalidNumber));
        assert_eq!(parse(b"1,2,3,4096,0"), Err(TelemetryError::OutOfRange));
        assert_eq!(parse(b"1,2,3,4,2"), Err(TelemetryError::OutOfRange));
    }

    proptest! {
        #[test]
        fn prop_encoded_text_parses_to_same_sample(
            x1 in 0u16..=ANALOG_MAX,
            y1 in 0u16..=ANALOG_MAX,
            x2 in 0u16..=ANALOG_MAX,
            y2 in 0u16..=ANALOG_MAX,
            sw in 0u8..=1,
        ) {
            let sample = RawSample::new(x1, y1, x2, y2, sw);
            let text = encode(&sample);
            prop_assert!(text.len() <= 21);
            prop_assert_eq!(parse(&text), Ok(sample));
        }
    }
}
