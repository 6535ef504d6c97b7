//! CSV record loading.
//!
//! Headers are matched case-insensitively against the per-command record
//! schemas (all schemas declare upper-case names, incoming headers are
//! upper-cased before serde sees them). Unknown columns are ignored; a
//! missing required column or a malformed row fails the whole read.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Load every row of `path` into typed records, preserving file order.
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    parse(File::open(path)?)
}

fn parse<T: DeserializeOwned, R: Read>(input: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: csv::StringRecord = reader.headers()?.iter().map(str::to_uppercase).collect();
    reader.set_headers(headers);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
