//! # Field Decoder — Positional Accessors Over a Citizen Number
//!
//! Decodes the embedded fields of an 18-character body: administrative
//! region codes, birth date, sequence code, and gender. Legacy 15-digit
//! inputs are widened through [`crate::convert`] at construction.
//!
//! ## Strictness
//!
//! Accessors assume a pre-validated identifier and must not guess: a
//! non-numeric character in a numeric-only slot, or a birth-date string
//! that is not a real calendar date, fails with a [`DecodeError`] rather
//! than yielding a partial or zero-valued result.
//!
//! Note the deliberate asymmetry with [`crate::validate`]: the boolean
//! validity queries are checksum-only and accept a calendrically
//! impossible birth date, while the accessors here reject it.
//!
//! ## State
//!
//! Every accessor recomputes from the stored text per call. Nothing is
//! cached and nothing is shared.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::{CnidError, DecodeError, FormatError};
use crate::shape::{IdShape, RawIdentifier};

/// Gender encoded by the parity of the sequence code's last digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Even sequence digit.
    Female,
    /// Odd sequence digit.
    Male,
}

impl Gender {
    /// The conventional bit encoding: female 0, male 1.
    pub fn bit(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    fn from_sequence_digit(digit: u32) -> Self {
        if digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Read-only view over a validated 18-character body.
///
/// Field layout (0-indexed): province `[0..2]`, city `[0..4]`, district
/// `[0..6]`, birth date `[6..14]` as `yyyyMMdd`, sequence `[14..17]`,
/// control character `[17]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIdentity {
    body: String,
}

impl DecodedIdentity {
    /// Build a decoder over a 15- or 18-digit citizen number.
    ///
    /// 15-digit inputs are widened via [`convert::lengthen`]; any other
    /// shape is rejected. The control character is not verified here —
    /// pair with [`crate::validate::is_valid_card`] when checksum validity
    /// matters.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] (wrapped in [`CnidError`]) when the input
    /// is not a syntactically well-formed 15- or 18-digit body.
    pub fn parse(id: &str) -> Result<Self, CnidError> {
        let raw = RawIdentifier::classify(id);
        match raw.shape() {
            IdShape::Body18 => Ok(Self {
                body: raw.text().to_owned(),
            }),
            IdShape::Body15 => Ok(Self {
                body: convert::lengthen(raw.text())?,
            }),
            _ => Err(FormatError::BadShape(
                "expected a 15- or 18-digit citizen number".to_owned(),
            )
            .into()),
        }
    }

    /// The normalized 18-character body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// 2-character province code.
    pub fn province_code(&self) -> Result<&str, DecodeError> {
        self.numeric_slot(0, 2, "province")
    }

    /// 4-character city code (province + city).
    pub fn city_code(&self) -> Result<&str, DecodeError> {
        self.numeric_slot(0, 4, "city")
    }

    /// 6-character district code (province + city + district).
    pub fn district_code(&self) -> Result<&str, DecodeError> {
        self.numeric_slot(0, 6, "district")
    }

    /// Birth date parsed from positions 6..14 as `yyyyMMdd`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::NonNumericField`] if the slot is not all digits;
    /// [`DecodeError::InvalidBirthDate`] if the digits do not name a real
    /// calendar date (month 01–12, day valid for that month and year,
    /// leap-year February included).
    pub fn birth_date(&self) -> Result<NaiveDate, DecodeError> {
        let text = self.numeric_slot(6, 14, "birth date")?;
        let year: i32 = text[..4]
            .parse()
            .map_err(|_| DecodeError::InvalidBirthDate(text.to_owned()))?;
        let month: u32 = text[4..6]
            .parse()
            .map_err(|_| DecodeError::InvalidBirthDate(text.to_owned()))?;
        let day: u32 = text[6..8]
            .parse()
            .map_err(|_| DecodeError::InvalidBirthDate(text.to_owned()))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DecodeError::InvalidBirthDate(text.to_owned()))
    }

    /// 3-digit sequence code (registration order within birth date and
    /// district).
    pub fn sequence_code(&self) -> Result<&str, DecodeError> {
        self.numeric_slot(14, 17, "sequence")
    }

    /// Gender from the parity of position 16.
    pub fn gender(&self) -> Result<Gender, DecodeError> {
        let digit = self.body[16..17]
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(DecodeError::NonNumericField { field: "sequence" })?;
        Ok(Gender::from_sequence_digit(digit))
    }

    /// Gender as its conventional bit: female 0, male 1.
    pub fn gender_bit(&self) -> Result<u8, DecodeError> {
        Ok(self.gender()?.bit())
    }

    /// The control character at position 17.
    pub fn checksum_char(&self) -> char {
        // The constructor guarantees an 18-character ASCII body.
        self.body.as_bytes()[17] as char
    }

    /// Full elapsed years from the birth date to `reference`, minus one
    /// when the reference month/day precedes the birth month/day (the
    /// birthday has not yet been reached in the reference year).
    ///
    /// # Errors
    ///
    /// Propagates [`DecodeError`] from [`Self::birth_date`], and returns
    /// [`DecodeError::ReferenceBeforeBirth`] rather than a negative age
    /// when `reference` precedes the birth date.
    pub fn age_at(&self, reference: NaiveDate) -> Result<u32, DecodeError> {
        let birth = self.birth_date()?;
        if reference < birth {
            return Err(DecodeError::ReferenceBeforeBirth);
        }
        let mut years = reference.year() - birth.year();
        if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        // Non-negative by the reference check above.
        Ok(years as u32)
    }

    /// Slice `[start..end]` of the body, required to be all ASCII digits.
    fn numeric_slot(
        &self,
        start: usize,
        end: usize,
        field: &'static str,
    ) -> Result<&str, DecodeError> {
        let slot = &self.body[start..end];
        if slot.bytes().all(|b| b.is_ascii_digit()) {
            Ok(slot)
        } else {
            Err(DecodeError::NonNumericField { field })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(id: &str) -> DecodedIdentity {
        DecodedIdentity::parse(id).unwrap()
    }

    #[test]
    fn test_region_codes() {
        let d = decoded("440101199001011233");
        assert_eq!(d.province_code().unwrap(), "44");
        assert_eq!(d.city_code().unwrap(), "4401");
        assert_eq!(d.district_code().unwrap(), "440101");
    }

    #[test]
    fn test_birth_date() {
        let d = decoded("440101199001011233");
        assert_eq!(
            d.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_sequence_and_checksum() {
        let d = decoded("440101199001011233");
        assert_eq!(d.sequence_code().unwrap(), "123");
        assert_eq!(d.checksum_char(), '3');
    }

    #[test]
    fn test_gender_parity() {
        // Position 16 digit 3 → male (bit 1); digit 4 → female (bit 0).
        let male = decoded("440101199001011233");
        assert_eq!(male.gender().unwrap(), Gender::Male);
        assert_eq!(male.gender_bit().unwrap(), 1);

        let female = decoded("440101199001011241");
        assert_eq!(female.gender().unwrap(), Gender::Female);
        assert_eq!(female.gender_bit().unwrap(), 0);
    }

    #[test]
    fn test_15_digit_input_is_widened() {
        let d = decoded("440101900101123");
        assert_eq!(d.body(), "440101199001011233");
        assert_eq!(
            d.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_impossible_date_rejected() {
        // Checksum-plausible shape, day 32: accessors refuse what the
        // boolean validators would wave through.
        let d = decoded("110101199001320030");
        assert_eq!(
            d.birth_date(),
            Err(DecodeError::InvalidBirthDate("19900132".to_owned()))
        );
    }

    #[test]
    fn test_leap_year_february() {
        let d = decoded("110101200002290032");
        assert_eq!(
            d.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
        );
        let not_leap = decoded("110101190002290032");
        assert!(matches!(
            not_leap.birth_date(),
            Err(DecodeError::InvalidBirthDate(_))
        ));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(DecodedIdentity::parse("H12345678").is_err());
        assert!(DecodedIdentity::parse("").is_err());
        assert!(DecodedIdentity::parse("44010119900101123").is_err());
    }

    #[test]
    fn test_age_before_birthday() {
        // Born 2000-03-15: still 23 on 2024-03-14, 24 from 2024-03-15.
        let d = decoded("110101200003150033");
        let day_before = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(d.age_at(day_before).unwrap(), 23);
        assert_eq!(d.age_at(birthday).unwrap(), 24);
        assert_eq!(d.age_at(later).unwrap(), 24);
    }

    #[test]
    fn test_age_on_birth_date_is_zero() {
        let d = decoded("110101200003150033");
        let birth = NaiveDate::from_ymd_opt(2000, 3, 15).unwrap();
        assert_eq!(d.age_at(birth).unwrap(), 0);
    }

    #[test]
    fn test_age_before_birth_is_an_error() {
        let d = decoded("110101200003150033");
        let before = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(d.age_at(before), Err(DecodeError::ReferenceBeforeBirth));
    }

    #[test]
    fn test_gender_serde() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"Male\"");
        let g: Gender = serde_json::from_str("\"Female\"").unwrap();
        assert_eq!(g, Gender::Female);
    }
}
