//! # Decode Subcommand
//!
//! Decodes the positional fields of a 15- or 18-digit citizen number and
//! prints them as a plain listing or as JSON.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use cnid_core::DecodedIdentity;

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// The 15- or 18-digit citizen number to decode.
    pub id: String,

    /// Emit the decoded fields as a JSON document.
    #[arg(long)]
    pub json: bool,

    /// Reference date for the age computation (YYYY-MM-DD); defaults to
    /// today.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}

/// Decoded fields in serializable form.
#[derive(Debug, Serialize)]
pub struct DecodedFields {
    /// Normalized 18-character body.
    pub body: String,
    /// 2-character province code.
    pub province_code: String,
    /// 4-character city code.
    pub city_code: String,
    /// 6-character district code.
    pub district_code: String,
    /// Birth date in ISO format.
    pub birth_date: NaiveDate,
    /// 3-digit sequence code.
    pub sequence_code: String,
    /// Decoded gender.
    pub gender: cnid_core::Gender,
    /// Full elapsed years as of the reference date.
    pub age: u32,
    /// Reference date the age was computed against.
    pub age_as_of: NaiveDate,
    /// Whether the control character verifies (case-insensitive).
    pub checksum_valid: bool,
}

/// Decode an identifier into its serializable field set.
pub fn decode_fields(id: &str, as_of: NaiveDate) -> anyhow::Result<DecodedFields> {
    let decoded = DecodedIdentity::parse(id).context("not a 15- or 18-digit citizen number")?;
    Ok(DecodedFields {
        body: decoded.body().to_owned(),
        province_code: decoded.province_code()?.to_owned(),
        city_code: decoded.city_code()?.to_owned(),
        district_code: decoded.district_code()?.to_owned(),
        birth_date: decoded.birth_date()?,
        sequence_code: decoded.sequence_code()?.to_owned(),
        gender: decoded.gender()?,
        age: decoded.age_at(as_of)?,
        age_as_of: as_of,
        checksum_valid: cnid_core::is_valid_card18(decoded.body(), true),
    })
}

/// Run the decode subcommand.
pub fn run(args: &DecodeArgs) -> anyhow::Result<()> {
    let as_of = args
        .as_of
        .unwrap_or_else(|| Local::now().date_naive());
    let fields = decode_fields(&args.id, as_of)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("body:           {}", fields.body);
        println!("province code:  {}", fields.province_code);
        println!("city code:      {}", fields.city_code);
        println!("district code:  {}", fields.district_code);
        println!("birth date:     {}", fields.birth_date);
        println!("sequence code:  {}", fields.sequence_code);
        println!("gender:         {:?}", fields.gender);
        println!("age (as of {}): {}", fields.age_as_of, fields.age);
        println!(
            "checksum:       {}",
            if fields.checksum_valid { "valid" } else { "invalid" }
        );
    }
    Ok(())
}
