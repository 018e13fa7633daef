//! # cnid CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Citizen-number toolchain.
///
/// Validates 15/18-digit citizen numbers and HK/Macau permits, converts
/// between the legacy and current formats, and decodes embedded fields.
#[derive(Parser, Debug)]
#[command(name = "cnid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validity queries for citizen numbers and permits.
    Check(cnid_cli::check::CheckArgs),
    /// Decode region codes, birth date, sequence, gender, and age.
    Decode(cnid_cli::decode::DecodeArgs),
    /// Convert between the 15- and 18-digit formats.
    Convert(cnid_cli::convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            if !cnid_cli::check::run(&args) {
                std::process::exit(1);
            }
        }
        Commands::Decode(args) => cnid_cli::decode::run(&args)?,
        Commands::Convert(args) => cnid_cli::convert::run(&args)?,
    }

    Ok(())
}
