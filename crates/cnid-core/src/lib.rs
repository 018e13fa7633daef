//! # cnid-core — Citizen Identification Number Codec
//!
//! Codec and validator for the structured identity-number strings used in
//! Mainland China: the 15- and 18-digit Citizen Identification Numbers of
//! GB11643-1999 and the companion HK/Macau travel-permit formats.
//!
//! ## Layers
//!
//! 1. **Shape classification** ([`shape`]) — a raw string is classified
//!    once, by length and character set only, into a closed shape enum.
//! 2. **Checksum engine** ([`checksum`]) — the mod-11 weighted control
//!    character over the 17 body digits.
//! 3. **Format converter** ([`convert`]) — lossless 15⇄18 transformation.
//! 4. **Field decoder** ([`decode`]) — region codes, birth date, sequence
//!    code, gender, and age, with strict calendar validation.
//! 5. **Facade** ([`validate`]) — boolean validity queries that never
//!    error.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (this is the leaf of the workspace DAG).
//! - No `unsafe` code, no I/O, no shared mutable state: every operation
//!   is a pure function of its input plus the constant tables, safe to
//!   call from any number of threads.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Region codes are checked for shape only; whether a code names a
//!   real, currently-registered administrative division is out of scope.

pub mod checksum;
pub mod convert;
pub mod decode;
pub mod error;
pub mod permit;
pub mod shape;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use decode::{DecodedIdentity, Gender};
pub use error::{ChecksumError, CnidError, DecodeError, FormatError};
pub use permit::{is_valid_hk_mo, is_valid_home_return};
pub use shape::{IdShape, RawIdentifier};
pub use validate::{is_valid_card, is_valid_card18};
