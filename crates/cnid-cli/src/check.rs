//! # Check Subcommand
//!
//! Boolean validity queries: the general card check and the dedicated
//! Home-Return-Permit check.

use clap::Args;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifiers to validate.
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Validate as Home-Return-Permit numbers instead of citizen
    /// numbers/permits.
    #[arg(long)]
    pub home_return: bool,
}

/// Run the check over every identifier. Returns `true` when all are valid.
pub fn run(args: &CheckArgs) -> bool {
    let mut all_valid = true;
    for id in &args.ids {
        let valid = if args.home_return {
            cnid_core::is_valid_home_return(id)
        } else {
            cnid_core::is_valid_card(id)
        };
        if valid {
            tracing::debug!(id = %id, "valid");
        } else {
            all_valid = false;
        }
        println!("{id}\t{}", if valid { "valid" } else { "invalid" });
    }
    all_valid
}
