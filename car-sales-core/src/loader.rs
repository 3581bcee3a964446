//! Sales data loading
//!
//! Reads the JSON array of sales records. Errors are classified so callers can
//! tell a missing file from broken JSON from a record with a bad shape.

use crate::types::{Result, SalesError, SalesRecord};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Load all sales records from a JSON file
///
/// The file handle is released before returning.
pub fn load_records(path: &Path) -> Result<Vec<SalesRecord>> {
    log::info!("Loading sales data: {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SalesError::InputNotFound(path.to_path_buf()),
        _ => SalesError::IoError(e),
    })?;

    let records = load_records_from_reader(BufReader::new(file))?;
    log::info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Load all sales records from any reader producing a JSON array
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<SalesRecord>> {
    let values: Vec<Value> = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            SalesError::IoError(e.into())
        } else {
            SalesError::MalformedJson(e)
        }
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| SalesError::InvalidRecord {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}
