//! Money helpers using rust_decimal for precision
//!
//! Prices are kept as `Decimal` on the client and only become `f64` at the
//! JSON boundary.

use std::str::FromStr;

use rust_decimal::prelude::*;
use thiserror::Error;

/// Display precision for prices (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Price text that cannot be turned into a valid price
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is required")]
    Empty,

    #[error("price is not a number: {0:?}")]
    NotANumber(String),

    #[error("price must be non-negative, got {0}")]
    Negative(Decimal),
}

/// Format a price as `$x.xx`
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Parse user-entered price text
///
/// Accepts plain decimals (`3.5`, `12`, `.99`) and scientific notation
/// (`1e2`), surrounding whitespace ignored.
pub fn parse_price(text: &str) -> Result<Decimal, PriceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PriceError::NotANumber(trimmed.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(PriceError::Negative(value));
    }
    Ok(value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::from_str("2.5").unwrap()), "$2.50");
        assert_eq!(format_price(Decimal::from(3)), "$3.00");
        assert_eq!(format_price(Decimal::from_str("0.125").unwrap()), "$0.13");
        assert_eq!(format_price(Decimal::from_str("19.999").unwrap()), "$20.00");
    }

    #[test]
    fn test_parse_price_accepts_numbers() {
        assert_eq!(parse_price("3.5").unwrap(), Decimal::from_str("3.5").unwrap());
        assert_eq!(parse_price(" 12 ").unwrap(), Decimal::from(12));
        assert_eq!(parse_price("1e2").unwrap(), Decimal::from(100));
        assert_eq!(parse_price("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), Err(PriceError::Empty));
        assert_eq!(parse_price("   "), Err(PriceError::Empty));
        assert!(matches!(parse_price("abc"), Err(PriceError::NotANumber(_))));
        assert!(matches!(parse_price("NaN"), Err(PriceError::NotANumber(_))));
        assert!(matches!(parse_price("-1.5"), Err(PriceError::Negative(_))));
    }
}
