//! # Shape Classification
//!
//! Classifies a raw input string into one of the closed identifier shapes
//! exactly once at entry, so that downstream dispatch is an exhaustive
//! `match` rather than length comparisons scattered across callers.
//!
//! Classification looks only at length and character set. It says nothing
//! about checksum validity or calendar plausibility — those are the
//! [`crate::checksum`] and [`crate::decode`] layers' business.

use serde::{Deserialize, Serialize};

/// The closed set of recognized identifier shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdShape {
    /// 18-character citizen number: 17 digits plus a digit-or-`X` control
    /// character.
    Body18,
    /// Legacy 15-digit citizen number: all numeric.
    Body15,
    /// HK/Macau permit candidate: an `[HhMm]` letter followed by digits.
    /// Covers the 9-character historical variant and the 10-character
    /// dispatch length; the pattern match in [`crate::permit`] decides.
    Permit10,
    /// Home-Return-Permit candidate: an `[HhMm]` letter followed by
    /// 10 digits.
    Permit11,
    /// Anything else.
    Invalid,
}

/// An immutable input string paired with its classified shape.
///
/// Constructed fresh per call and never mutated; there is no cache or
/// registry behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawIdentifier {
    text: String,
    shape: IdShape,
}

impl RawIdentifier {
    /// Classify an input string by length and character set only.
    pub fn classify(input: &str) -> Self {
        Self {
            text: input.to_owned(),
            shape: classify_shape(input),
        }
    }

    /// The original input text, unmodified.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The shape assigned at classification.
    pub fn shape(&self) -> IdShape {
        self.shape
    }
}

/// True when `s` is exactly 17 ASCII digits followed by a digit or
/// `X`/`x` control character.
pub(crate) fn is_body18(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 18 || !s.is_ascii() {
        return false;
    }
    bytes[..17].iter().all(u8::is_ascii_digit)
        && (bytes[17].is_ascii_digit() || bytes[17] == b'X' || bytes[17] == b'x')
}

/// True when `s` is exactly `len` ASCII digits.
pub(crate) fn is_all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when `s` is an `[HhMm]` letter followed by exactly `digits`
/// ASCII digits.
pub(crate) fn is_permit_pattern(s: &str, digits: usize) -> bool {
    let mut chars = s.chars();
    let Some(prefix) = chars.next() else {
        return false;
    };
    if !matches!(prefix, 'H' | 'h' | 'M' | 'm') {
        return false;
    }
    is_all_digits(chars.as_str(), digits)
}

fn classify_shape(input: &str) -> IdShape {
    if is_body18(input) {
        return IdShape::Body18;
    }
    if is_all_digits(input, 15) {
        return IdShape::Body15;
    }
    // Permit candidates keep the letter-plus-digits character set; the
    // digit counts here are dispatch widths, not acceptance (see
    // crate::permit for the authoritative patterns).
    if is_permit_pattern(input, 8) || is_permit_pattern(input, 9) {
        return IdShape::Permit10;
    }
    if is_permit_pattern(input, 10) {
        return IdShape::Permit11;
    }
    IdShape::Invalid
}
