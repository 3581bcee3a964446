//! Currency string parsing
//!
//! Turns display prices such as "$1234.56" into exact decimals according to a
//! [`PriceFormat`].

use crate::config::PriceFormat;
use crate::types::PriceError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a price string into an exact decimal
///
/// The leading currency symbol (any run of characters that are not digits,
/// signs or the decimal separator) is stripped, digit-group separators are
/// removed when the format allows them, and the rest must be a plain decimal
/// number.
///
/// # Example
/// ```
/// use car_sales_core::{parse_price, PriceFormat};
///
/// let price = parse_price("$1234.56", &PriceFormat::default()).unwrap();
/// assert_eq!(price.to_string(), "1234.56");
///
/// // Grouped prices need an explicit thousands separator
/// assert!(parse_price("$1,234.56", &PriceFormat::default()).is_err());
/// assert_eq!(parse_price("$1,234.56", &PriceFormat::en_us()).unwrap(), price);
/// ```
pub fn parse_price(raw: &str, format: &PriceFormat) -> Result<Decimal, PriceError> {
    let decimal_separator = format.decimal_separator;
    let number = raw.trim().trim_start_matches(|c: char| {
        !(c.is_ascii_digit() || c == '-' || c == '+' || c == decimal_separator)
    });

    if number.is_empty() {
        return Err(PriceError::Empty);
    }

    let mut normalized: String = match format.thousands_separator {
        Some(group) => number.chars().filter(|&c| c != group).collect(),
        None => number.to_string(),
    };
    if decimal_separator != '.' {
        normalized = normalized.replace(decimal_separator, ".");
    }

    Decimal::from_str(&normalized).map_err(|e| {
        log::trace!("Rejected price {:?} ({})", raw, e);
        PriceError::NotANumber(number.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_plain_dollar_price() {
        let format = PriceFormat::default();
        assert_eq!(parse_price("$1234.56", &format).unwrap(), dec("1234.56"));
        assert_eq!(parse_price("  $18.00 ", &format).unwrap(), dec("18.00"));
        assert_eq!(parse_price("42", &format).unwrap(), dec("42"));
    }

    #[test]
    fn test_thousands_separator_rejected_by_default() {
        let err = parse_price("$1,234.56", &PriceFormat::default()).unwrap_err();
        assert_eq!(err, PriceError::NotANumber("1,234.56".to_string()));
    }

    #[test]
    fn test_thousands_separator_accepted_when_configured() {
        let format = PriceFormat::en_us();
        assert_eq!(parse_price("$1,234.56", &format).unwrap(), dec("1234.56"));
        assert_eq!(parse_price("$1234.56", &format).unwrap(), dec("1234.56"));
    }

    #[test]
    fn test_european_convention() {
        let format = PriceFormat::new()
            .with_decimal_separator(',')
            .with_thousands_separator('.');
        assert_eq!(parse_price("€1.234,56", &format).unwrap(), dec("1234.56"));
    }

    #[test]
    fn test_multi_char_symbol() {
        let format = PriceFormat::default();
        assert_eq!(parse_price("US$ 99.90", &format).unwrap(), dec("99.90"));
    }

    #[test]
    fn test_empty_and_garbage() {
        let format = PriceFormat::default();
        assert_eq!(parse_price("$", &format).unwrap_err(), PriceError::Empty);
        assert_eq!(parse_price("", &format).unwrap_err(), PriceError::Empty);
        assert!(matches!(
            parse_price("$12.3x", &format),
            Err(PriceError::NotANumber(_))
        ));
    }
}
