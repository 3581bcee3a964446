//! Human-readable output
//!
//! Builds the summary lines and the tabular listing handed to the report and
//! email layers.

use crate::aggregator::AggregateResult;
use crate::types::{Car, SalesRecord};

/// Tabular listing: header row followed by one row per record
pub type Table = Vec<Vec<String>>;

/// Column headers of [`records_to_table`]
pub const TABLE_HEADER: [&str; 4] = ["ID", "Car", "Price", "Total Sales"];

/// Line separator used by the report body
pub const HTML_LINE_BREAK: &str = "<br/>";

/// Render a car as `"<make> <model> (<year>)"`
pub fn format_car(car: &Car) -> String {
    format!("{} {} ({})", car.make, car.model, car.year)
}

/// Convert records into a table with a fixed header row
///
/// Rows keep the input order; the price column shows the original string.
pub fn records_to_table(records: &[SalesRecord]) -> Table {
    let mut table: Table = Vec::with_capacity(records.len() + 1);
    table.push(TABLE_HEADER.iter().map(|h| h.to_string()).collect());

    for record in records {
        table.push(vec![
            record.id.to_string(),
            format_car(&record.car),
            record.price.clone(),
            record.total_sales.to_string(),
        ]);
    }

    table
}

/// The three summary lines for an aggregation result
pub fn summarize(result: &AggregateResult<'_>) -> Vec<String> {
    vec![
        format!(
            "The {} generated the most revenue: ${}",
            format_car(&result.top_revenue.record.car),
            result.top_revenue.revenue
        ),
        format!(
            "The {} had the most sales: {}",
            format_car(&result.top_sales.car),
            result.top_sales.total_sales
        ),
        format!(
            "The most popular year was {} with {} sales.",
            result.most_popular_year.year, result.most_popular_year.total_sales
        ),
    ]
}

/// Summary joined with `<br/>` for the PDF report body
pub fn html_body(summary: &[String]) -> String {
    summary.join(HTML_LINE_BREAK)
}

/// Summary joined with newlines for the email body
pub fn text_body(summary: &[String]) -> String {
    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::process_data;
    use crate::config::PriceFormat;

    fn records() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new(1, Car::new("A", "X", 2020), "$100.00", 2),
            SalesRecord::new("b-2", Car::new("B", "Y", 2020), "$50.00", 5),
        ]
    }

    #[test]
    fn test_format_car() {
        let car = Car::new("Chevrolet", "Impala", 1975);
        assert_eq!(format_car(&car), "Chevrolet Impala (1975)");
    }

    #[test]
    fn test_records_to_table() {
        let records = records();
        let table = records_to_table(&records);

        assert_eq!(table.len(), records.len() + 1);
        assert_eq!(table[0], vec!["ID", "Car", "Price", "Total Sales"]);
        assert_eq!(table[1], vec!["1", "A X (2020)", "$100.00", "2"]);
        assert_eq!(table[2], vec!["b-2", "B Y (2020)", "$50.00", "5"]);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = records_to_table(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].len(), TABLE_HEADER.len());
    }

    #[test]
    fn test_summarize() {
        let records = records();
        let result = process_data(&records, &PriceFormat::default()).unwrap();
        let summary = summarize(&result);

        assert_eq!(
            summary,
            vec![
                "The B Y (2020) generated the most revenue: $250.00",
                "The B Y (2020) had the most sales: 5",
                "The most popular year was 2020 with 7 sales.",
            ]
        );
    }

    #[test]
    fn test_bodies() {
        let lines = vec!["one".to_string(), "two".to_string()];
        assert_eq!(html_body(&lines), "one<br/>two");
        assert_eq!(text_body(&lines), "one\ntwo");
    }
}
