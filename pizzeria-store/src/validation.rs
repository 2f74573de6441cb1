use std::ops::RangeInclusive;

/// Prices a restaurant may charge for a pizza, in whole currency units.
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("price is required")]
    PriceRequired,
    #[error("price must be between {} and {}", PRICE_RANGE.start(), PRICE_RANGE.end())]
    PriceOutOfRange(i64),
}

/// Checks a candidate price before it is stored.
///
/// An absent price and an explicit null are both reported as `PriceRequired`.
/// Accepted values are returned unchanged.
pub fn validate_price(price: Option<i64>) -> Result<i32, ValidationError> {
    let price = price.ok_or(ValidationError::PriceRequired)?;
    if !PRICE_RANGE.contains(&price) {
        return Err(ValidationError::PriceOutOfRange(price));
    }
    // PRICE_RANGE fits in i32
    Ok(price as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_price_in_range() {
        for price in PRICE_RANGE {
            assert_eq!(validate_price(Some(price)), Ok(price as i32));
        }
    }

    #[test]
    fn test_rejects_missing_price() {
        assert_eq!(validate_price(None), Err(ValidationError::PriceRequired));
    }

    #[test]
    fn test_rejects_out_of_range_price() {
        for price in [i64::MIN, -1, 0, 31, 35, i64::MAX] {
            assert_eq!(
                validate_price(Some(price)),
                Err(ValidationError::PriceOutOfRange(price))
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PriceRequired.to_string(),
            "price is required"
        );
        assert_eq!(
            ValidationError::PriceOutOfRange(35).to_string(),
            "price must be between 1 and 30"
        );
    }
}
