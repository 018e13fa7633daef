//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Format errors carry the position or length that violated the shape.
//! - Checksum errors include the expected and found control characters.
//! - Decode errors name the positional field that failed.
//!
//! ## Propagation Policy
//!
//! Boolean validity queries ([`crate::validate`], [`crate::permit`]) never
//! surface these errors: an internal `FormatError` while answering a yes/no
//! question becomes `false` at the boundary. Decode accessors propagate
//! `DecodeError` to the caller, because returning a plausible-looking wrong
//! value for an invalid identifier is a worse failure mode than an explicit
//! error.

use thiserror::Error;

/// Input length or character class does not match the expected shape
/// for the requested operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input is the wrong length for the requested operation.
    #[error("expected {expected} characters, got {actual}")]
    WrongLength {
        /// The length the operation requires.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },

    /// A numeric-only position holds a non-numeric character.
    #[error("non-numeric character at position {position}")]
    NonNumeric {
        /// Zero-based character position of the offending character.
        position: usize,
    },

    /// The input does not have the structural shape of a citizen number body.
    #[error("malformed identifier body: {0}")]
    BadShape(String),
}

/// An 18-digit input is shape-valid but its control character does not
/// match the recomputed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    /// The recomputed control character disagrees with the one supplied.
    #[error("control character mismatch: expected {expected}, found {actual}")]
    Mismatch {
        /// Control character recomputed from the body digits.
        expected: char,
        /// Control character present in the input.
        actual: char,
    },
}

/// A positional field decode requires numeric characters or a real
/// calendar date and the input does not satisfy that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A numeric-only field slot contains non-numeric characters.
    #[error("non-numeric characters in {field} field")]
    NonNumericField {
        /// Name of the positional field that failed.
        field: &'static str,
    },

    /// The embedded birth-date text does not name a real calendar date.
    #[error("birth date {0:?} is not a real calendar date")]
    InvalidBirthDate(String),

    /// An age computation was asked for a reference date before the
    /// decoded birth date.
    #[error("reference date precedes birth date")]
    ReferenceBeforeBirth,
}

/// Top-level error type for callers that want a single umbrella.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CnidError {
    /// Shape violation.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Control character violation.
    #[error("checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    /// Positional field decode violation.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
