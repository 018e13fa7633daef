//! # Facade — Boolean Validity Queries
//!
//! Routes a raw string to the right validator from its classified shape
//! and never surfaces an error: any internal `FormatError` encountered
//! while answering a yes/no question becomes `false` at this boundary.
//!
//! ## Checksum-only
//!
//! These queries validate the control character, not the embedded birth
//! date. A checksum-correct body whose birth date is calendrically
//! impossible (day 32) still passes here; only the accessors in
//! [`crate::decode`] demand a real calendar date. The asymmetry is
//! intentional; see also the module docs in [`crate::decode`].

use crate::checksum;
use crate::convert;
use crate::permit;
use crate::shape::{IdShape, RawIdentifier};

/// Validate a citizen number or HK/Macau permit of any supported shape.
///
/// Returns `false` for blank input or input containing any whitespace,
/// regardless of length — identifiers are never trimmed on the caller's
/// behalf. Otherwise dispatches on the classified shape: 18-character
/// bodies go to the checksum engine (case-insensitive control character),
/// 15-digit bodies are widened first, permit candidates go to the
/// pattern validator, and everything else is invalid.
pub fn is_valid_card(id: &str) -> bool {
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return false;
    }
    match RawIdentifier::classify(id).shape() {
        IdShape::Body18 => checksum::verify(id, true),
        IdShape::Body15 => match convert::lengthen(id) {
            Ok(id18) => checksum::verify(&id18, true),
            Err(_) => false,
        },
        IdShape::Permit10 => permit::is_valid_hk_mo(id),
        IdShape::Permit11 | IdShape::Invalid => false,
    }
}

/// Validate an 18-character citizen number with explicit case-sensitivity
/// control for the `X` control character.
///
/// Direct pass-through to the checksum engine; never errors.
pub fn is_valid_card18(id: &str, ignore_case: bool) -> bool {
    checksum::verify(id, ignore_case)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The facade never panics, whatever the input.
        #[test]
        fn is_valid_card_never_panics(s in ".{0,40}") {
            let _ = is_valid_card(&s);
            let _ = is_valid_card18(&s, true);
        }

        /// Every widened 15-digit body that the facade accepts is also
        /// accepted in its original 15-digit form.
        #[test]
        fn widened_and_legacy_agree(id15 in "[0-9]{15}") {
            let id18 = crate::convert::lengthen(&id15).unwrap();
            prop_assert_eq!(is_valid_card(&id15), is_valid_card(&id18));
        }
    }
}
