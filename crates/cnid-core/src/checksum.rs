//! # Checksum Engine — GB11643-1999 Mod-11 Control Character
//!
//! Computes and verifies the 18th character of a citizen number from the
//! 17 body digits, per the national standard's weighted mod-11 scheme.
//!
//! ## Why a strict positional recomputation
//!
//! A weighted mod-11 scheme detects any single-digit transcription error
//! and most transpositions. That guarantee only holds if the control
//! character is recomputed positionally against the published weights —
//! never approximated by a lookup or heuristic.
//!
//! ## Invariant
//!
//! The weight table and control alphabet are module-scoped immutable
//! constants. They are never mutated after initialization and need no
//! synchronization.

use crate::error::FormatError;

/// Positional weights applied to the first 17 digits of an 18-digit body.
pub const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Control characters indexed by `weighted_sum mod 11`.
pub const CHECKSUM_ALPHABET: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Compute the control character for a 17-digit body.
///
/// # Errors
///
/// Returns [`FormatError::WrongLength`] if the input is not exactly 17
/// characters, or [`FormatError::NonNumeric`] if any character is not an
/// ASCII digit.
pub fn checksum_char(body17: &str) -> Result<char, FormatError> {
    let len = body17.chars().count();
    if len != 17 {
        return Err(FormatError::WrongLength {
            expected: 17,
            actual: len,
        });
    }

    let mut sum: u32 = 0;
    for (position, c) in body17.chars().enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or(FormatError::NonNumeric { position })?;
        sum += digit * WEIGHTS[position];
    }

    Ok(CHECKSUM_ALPHABET[(sum % 11) as usize])
}

/// Verify the control character of an 18-character body.
///
/// Returns `false` — never an error — for any input that is not exactly
/// 18 characters or whose first 17 characters are not all numeric digits.
/// Malformed shape is a validation failure, not an error.
///
/// The recomputed character is uppercase `X`; with `ignore_case` a
/// lowercase `x` in the input also matches.
pub fn verify(body18: &str, ignore_case: bool) -> bool {
    let chars: Vec<char> = body18.chars().collect();
    if chars.len() != 18 {
        return false;
    }
    let body17: String = chars[..17].iter().collect();
    let Ok(expected) = checksum_char(&body17) else {
        return false;
    };
    let actual = chars[17];
    if ignore_case {
        expected.eq_ignore_ascii_case(&actual)
    } else {
        expected == actual
    }
}
