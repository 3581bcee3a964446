//! Price parsing configuration
//!
//! Prices arrive as display strings ("$1234.56"). The numeric convention used
//! to read them is passed in explicitly instead of being taken from the process
//! locale, so the same input always produces the same numbers.

use serde::{Deserialize, Serialize};

/// Numeric convention used when parsing price strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Character separating the integer and fractional parts
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Optional digit-group separator; `None` rejects grouped prices like "$1,234.56"
    #[serde(default)]
    pub thousands_separator: Option<char>,
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            thousands_separator: None,
        }
    }
}

impl PriceFormat {
    /// Create the default format: `.` decimal point, no digit grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// US-style format: `.` decimal point, `,` digit grouping
    pub fn en_us() -> Self {
        Self::new().with_thousands_separator(',')
    }

    /// Builder method: set the decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: accept a digit-group separator
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = Some(separator);
        self
    }

    /// Builder method: reject digit-group separators
    pub fn without_thousands_separator(mut self) -> Self {
        self.thousands_separator = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_format_builder() {
        let format = PriceFormat::new()
            .with_decimal_separator(',')
            .with_thousands_separator('.');

        assert_eq!(format.decimal_separator, ',');
        assert_eq!(format.thousands_separator, Some('.'));
        assert_eq!(format.without_thousands_separator().thousands_separator, None);
    }

    #[test]
    fn test_defaults() {
        let format = PriceFormat::default();
        assert_eq!(format.decimal_separator, '.');
        assert_eq!(format.thousands_separator, None);
        assert_eq!(PriceFormat::en_us().thousands_separator, Some(','));
    }

    #[test]
    fn test_deserialize_partial() {
        let format: PriceFormat = serde_json::from_str(r#"{"thousands_separator": ","}"#).unwrap();
        assert_eq!(format, PriceFormat::en_us());
    }
}
