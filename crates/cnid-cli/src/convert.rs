//! # Convert Subcommand
//!
//! 15⇄18 format conversion, direction chosen from the input shape.

use anyhow::bail;
use clap::Args;

use cnid_core::{convert, IdShape, RawIdentifier};

/// Arguments for the convert subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// The 15- or 18-digit citizen number to convert.
    pub id: String,
}

/// Convert in the direction implied by the input shape.
pub fn convert_id(id: &str) -> anyhow::Result<String> {
    match RawIdentifier::classify(id).shape() {
        IdShape::Body15 => Ok(convert::lengthen(id)?),
        IdShape::Body18 => Ok(convert::shorten(id)?),
        _ => bail!("not a 15- or 18-digit citizen number"),
    }
}

/// Run the convert subcommand.
pub fn run(args: &ConvertArgs) -> anyhow::Result<()> {
    let converted = convert_id(&args.id)?;
    println!("{converted}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengthen_direction() {
        assert_eq!(
            convert_id("440101900101123").unwrap(),
            "440101199001011233"
        );
    }

    #[test]
    fn test_shorten_direction() {
        assert_eq!(
            convert_id("440101199001011233").unwrap(),
            "440101900101123"
        );
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(convert_id("H12345678").is_err());
        assert!(convert_id("").is_err());
    }
}
