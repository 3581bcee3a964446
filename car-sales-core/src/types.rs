//! Core types for the car sales library
//!
//! This module defines the input record shape read from the sales JSON file and
//! the error type shared by every stage of the pipeline. Records are plain
//! immutable data; nothing downstream writes back into them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, SalesError>;

/// Opaque record identifier, passed through unchanged
///
/// Sales exports use either numeric or string identifiers, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Number(i64::from(value))
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// Car description nested inside every sales record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Manufacturer, e.g. "Toyota"
    #[serde(rename = "car_make")]
    pub make: String,
    /// Model name, e.g. "Corolla"
    #[serde(rename = "car_model")]
    pub model: String,
    /// Model year
    #[serde(rename = "car_year")]
    pub year: i32,
}

impl Car {
    /// Create a new car description
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }
}

/// One entry of the sales input array
///
/// The price is kept exactly as it appears in the input (including the
/// currency symbol) so the tabular listing can show it verbatim. Use
/// [`crate::price::parse_price`] to obtain a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: RecordId,
    pub car: Car,
    /// Unit price with a leading currency symbol, e.g. "$1234.56"
    pub price: String,
    /// Units sold
    pub total_sales: u64,
}

impl SalesRecord {
    /// Create a new record
    pub fn new(id: impl Into<RecordId>, car: Car, price: impl Into<String>, total_sales: u64) -> Self {
        Self {
            id: id.into(),
            car,
            price: price.into(),
            total_sales,
        }
    }
}

/// Why a price string could not be turned into a number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("no digits after the currency symbol")]
    Empty,

    #[error("not a decimal number: {0}")]
    NotANumber(String),
}

/// Errors that can occur while loading or summarizing sales data
#[derive(Debug, thiserror::Error)]
pub enum SalesError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed JSON input: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Invalid price {value:?} in record at index {index}: {source}")]
    InvalidPrice {
        index: usize,
        value: String,
        #[source]
        source: PriceError,
    },

    #[error("Revenue of record at index {index} is too large to represent")]
    RevenueOverflow { index: usize },

    #[error("Total sales for year {year} overflowed at record index {index}")]
    YearSalesOverflow { index: usize, year: i32 },

    #[error("No sales records to summarize")]
    EmptyDataset,
}
