//! Stock validation functions
//!
//! Pure predicates over candidate values. `validate_new_stock` is the entry
//! point used on creation; price updates are not routed through it.

use rust_decimal::Decimal;

use crate::models::Stock;

use super::errors::StockError;

/// A name is valid when it is not empty
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

/// A price is valid when it is not negative (zero allowed)
pub fn is_valid_price(price: Decimal) -> bool {
    price >= Decimal::ZERO
}

/// Validate a candidate stock before it is first persisted
///
/// # Returns
/// * `Ok(())` if the name is non-empty and the price is non-negative
/// * `Err(StockError::InvalidInput)` otherwise, without saying which rule failed
pub fn validate_new_stock(stock: &Stock) -> Result<(), StockError> {
    if is_valid_name(&stock.name) && is_valid_price(stock.current_price) {
        Ok(())
    } else {
        Err(StockError::InvalidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("ACME"));
        assert!(is_valid_name(" "));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_is_valid_price() {
        assert!(is_valid_price(dec!(10)));
        assert!(is_valid_price(dec!(0)));
        assert!(is_valid_price(dec!(-0)));
        assert!(!is_valid_price(dec!(-0.01)));
    }

    #[test]
    fn test_validate_new_stock() {
        assert!(validate_new_stock(&Stock::new("x".to_string(), dec!(0))).is_ok());

        let blank = validate_new_stock(&Stock::new(String::new(), dec!(10))).unwrap_err();
        let negative = validate_new_stock(&Stock::new("x".to_string(), dec!(-1))).unwrap_err();

        assert_eq!(blank.to_string(), "Supplied input is invalid");
        assert_eq!(negative.to_string(), blank.to_string());
    }
}
