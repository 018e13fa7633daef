//! # cnid-cli — Citizen-Number Command-Line Interface
//!
//! Structured clap-based CLI over [`cnid_core`].
//!
//! ## Subcommands
//!
//! - `check` — Validity queries for citizen numbers and permits
//! - `decode` — Field decoding with optional JSON output
//! - `convert` — 15⇄18 digit format conversion
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `cnid-core` — no codec logic here.

pub mod check;
pub mod convert;
pub mod decode;
