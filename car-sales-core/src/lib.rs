//! Car Sales Summary Library
//!
//! A small, stateless library that loads car sales records and computes the
//! summary facts used in the monthly sales report.
//!
//! # Architecture
//!
//! - Loads a JSON array of sales records with classified errors
//! - Parses display prices with an explicit numeric convention
//! - Aggregates the records in a single pass
//! - Formats summary lines and a tabular listing
//!
//! The library does NOT render PDFs or send email. Those live in the
//! application layer (car-sales-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use car_sales_core::{load_records, process_data, records_to_table, summarize, PriceFormat};
//! use std::path::Path;
//!
//! let records = load_records(Path::new("car_sales.json")).unwrap();
//! let result = process_data(&records, &PriceFormat::default()).unwrap();
//!
//! for line in summarize(&result) {
//!     println!("{}", line);
//! }
//! let table = records_to_table(&records);
//! assert_eq!(table.len(), records.len() + 1);
//! ```

// Public modules
pub mod aggregator;
pub mod config;
pub mod formatter;
pub mod loader;
pub mod price;
pub mod types;

// Re-export main types for convenience
pub use aggregator::{process_data, AggregateResult, RevenueLeader, SalesAggregator, YearSales};
pub use config::PriceFormat;
pub use formatter::{format_car, html_body, records_to_table, summarize, text_body, Table};
pub use loader::{load_records, load_records_from_reader};
pub use price::parse_price;
pub use types::{Car, PriceError, RecordId, Result, SalesError, SalesRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: the whole pipeline on an in-memory document
        let json = r#"[{"id": 7, "car": {"car_make": "Saab", "car_model": "900", "car_year": 1994},
                        "price": "$2000.00", "total_sales": 3}]"#;
        let records = load_records_from_reader(json.as_bytes()).unwrap();
        let result = process_data(&records, &PriceFormat::default()).unwrap();
        assert_eq!(summarize(&result).len(), 3);
    }
}
