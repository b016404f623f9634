use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{CodeRecord, OrderRecord};

/// Loads the MK/SAP crosswalk sheet from a URL or local file.
pub fn load_code_records(source: &str) -> Result<Vec<CodeRecord>> {
    parse_records(&read_source(source)?)
}

/// Loads the purchase-order sheet from a URL or local file.
pub fn load_order_records(source: &str) -> Result<Vec<OrderRecord>> {
    parse_records(&read_source(source)?)
}

fn read_source(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::blocking::get(source)?.error_for_status()?;
        return Ok(response.text()?);
    }
    Ok(fs::read_to_string(Path::new(source))?)
}

/// Header-driven CSV parse. Empty lines are skipped; short rows deserialize
/// with empty strings for the missing trailing fields. Any malformed row
/// fails the whole load (the dataset is all-or-nothing).
pub(crate) fn parse_records<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.into_records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(row.deserialize(Some(&headers))?);
    }
    Ok(records)
}
