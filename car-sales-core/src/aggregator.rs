//! Single-pass sales aggregation
//!
//! Walks the records once and keeps three running answers: the record with the
//! highest revenue, the record with the most units sold, and the model year
//! with the most units sold across all its records.
//!
//! Tie rules:
//! - revenue and sales leaders: the earlier record wins (strict `>`)
//! - most popular year: the smaller year wins

use crate::config::PriceFormat;
use crate::price::parse_price;
use crate::types::{Result, SalesError, SalesRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Record with the highest revenue, plus that revenue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueLeader<'a> {
    pub record: &'a SalesRecord,
    /// `price × total_sales`
    pub revenue: Decimal,
}

/// Model year with its cumulative units sold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSales {
    pub year: i32,
    pub total_sales: u64,
}

/// Summary facts computed from a non-empty record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult<'a> {
    pub top_revenue: RevenueLeader<'a>,
    pub top_sales: &'a SalesRecord,
    pub most_popular_year: YearSales,
    pub records_processed: usize,
    year_totals: BTreeMap<i32, u64>,
}

impl<'a> AggregateResult<'a> {
    /// Cumulative units sold per model year, ordered by year
    pub fn year_totals(&self) -> &BTreeMap<i32, u64> {
        &self.year_totals
    }
}

/// Streaming aggregator
///
/// Feed records with [`observe`](Self::observe) and collect the result with
/// [`finish`](Self::finish). Every step is O(log years).
#[derive(Debug)]
pub struct SalesAggregator<'a> {
    format: PriceFormat,
    top_revenue: Option<RevenueLeader<'a>>,
    top_sales: Option<&'a SalesRecord>,
    best_year: Option<YearSales>,
    year_totals: BTreeMap<i32, u64>,
    seen: usize,
}

impl<'a> SalesAggregator<'a> {
    /// Create an aggregator that parses prices with `format`
    pub fn new(format: PriceFormat) -> Self {
        Self {
            format,
            top_revenue: None,
            top_sales: None,
            best_year: None,
            year_totals: BTreeMap::new(),
            seen: 0,
        }
    }

    /// Fold one record into the running totals
    pub fn observe(&mut self, record: &'a SalesRecord) -> Result<()> {
        let index = self.seen;
        let price = parse_price(&record.price, &self.format).map_err(|source| {
            SalesError::InvalidPrice {
                index,
                value: record.price.clone(),
                source,
            }
        })?;
        let revenue = price
            .checked_mul(Decimal::from(record.total_sales))
            .ok_or(SalesError::RevenueOverflow { index })?;

        if self.top_revenue.map_or(true, |leader| revenue > leader.revenue) {
            log::debug!("New revenue leader at index {}: {}", index, revenue);
            self.top_revenue = Some(RevenueLeader { record, revenue });
        }

        if self
            .top_sales
            .map_or(true, |leader| record.total_sales > leader.total_sales)
        {
            log::debug!("New sales leader at index {}: {}", index, record.total_sales);
            self.top_sales = Some(record);
        }

        let year = record.car.year;
        let total = self.year_totals.entry(year).or_insert(0);
        *total = total
            .checked_add(record.total_sales)
            .ok_or(SalesError::YearSalesOverflow { index, year })?;
        let candidate = YearSales {
            year,
            total_sales: *total,
        };

        // Totals only grow, so only the year just updated can overtake the best.
        let replaces = match self.best_year {
            None => true,
            Some(best) => {
                candidate.total_sales > best.total_sales
                    || (candidate.total_sales == best.total_sales && candidate.year <= best.year)
            }
        };
        if replaces {
            self.best_year = Some(candidate);
        }

        self.seen += 1;
        Ok(())
    }

    /// Number of records observed so far
    pub fn records_seen(&self) -> usize {
        self.seen
    }

    /// Produce the summary, or [`SalesError::EmptyDataset`] if nothing was observed
    pub fn finish(self) -> Result<AggregateResult<'a>> {
        match (self.top_revenue, self.top_sales, self.best_year) {
            (Some(top_revenue), Some(top_sales), Some(most_popular_year)) => {
                log::info!(
                    "Aggregated {} records across {} model years",
                    self.seen,
                    self.year_totals.len()
                );
                Ok(AggregateResult {
                    top_revenue,
                    top_sales,
                    most_popular_year,
                    records_processed: self.seen,
                    year_totals: self.year_totals,
                })
            }
            _ => Err(SalesError::EmptyDataset),
        }
    }
}

/// Compute the summary facts for `records` in one pass
///
/// # Example
/// ```
/// use car_sales_core::{process_data, Car, PriceFormat, SalesRecord};
///
/// let records = vec![
///     SalesRecord::new(1, Car::new("A", "X", 2020), "$100.00", 2),
///     SalesRecord::new(2, Car::new("B", "Y", 2020), "$50.00", 5),
/// ];
/// let result = process_data(&records, &PriceFormat::default()).unwrap();
/// assert_eq!(result.top_revenue.record.car.make, "B");
/// assert_eq!(result.most_popular_year.total_sales, 7);
/// ```
pub fn process_data<'a>(
    records: &'a [SalesRecord],
    format: &PriceFormat,
) -> Result<AggregateResult<'a>> {
    let mut aggregator = SalesAggregator::new(format.clone());
    for record in records {
        aggregator.observe(record)?;
    }
    aggregator.finish()
}
