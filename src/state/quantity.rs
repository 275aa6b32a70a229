/// Quantity parsing
///
/// Quantities are typed by the user as free text. This module turns that
/// text into a positive count. Callers never show these errors; they pick
/// a fallback value instead.

use thiserror::Error;

/// Quantity used when a new item's quantity text can't be parsed
pub const DEFAULT_QUANTITY: u32 = 1;

/// Why a quantity draft was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity is empty")]
    Empty,

    #[error("quantity {0:?} is not a whole number")]
    NotANumber(String),

    #[error("quantity must be at least 1, got {0}")]
    NotPositive(i64),

    #[error("quantity {0:?} is too large")]
    TooLarge(String),
}

/// Parse quantity text into a positive count.
///
/// Surrounding whitespace is ignored. "0" and negative numbers are rejected.
pub fn parse_quantity(text: &str) -> Result<u32, QuantityError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    let value: i64 = trimmed.parse().map_err(|_| {
        // A long run of digits overflows i64 but is still "a number"
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            QuantityError::NotANumber(trimmed.to_string())
        } else if negative {
            // Saturated, the real value doesn't fit in an i64
            QuantityError::NotPositive(i64::MIN)
        } else {
            QuantityError::TooLarge(trimmed.to_string())
        }
    })?;

    if value < 1 {
        return Err(QuantityError::NotPositive(value));
    }

    u32::try_from(value).map_err(|_| QuantityError::TooLarge(trimmed.to_string()))
}

/// Parse quantity text, falling back to `fallback` on any error
pub fn parse_quantity_or(text: &str, fallback: u32) -> u32 {
    match parse_quantity(text) {
        Ok(quantity) => quantity,
        Err(e) => {
            tracing::debug!("Ignoring quantity input ({}), using {}", e, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_numbers() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity("12"), Ok(12));
        assert_eq!(parse_quantity(" 7 "), Ok(7));
        assert_eq!(parse_quantity("+2"), Ok(2));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_quantity(""), Err(QuantityError::Empty));
        assert_eq!(parse_quantity("   "), Err(QuantityError::Empty));
        assert_eq!(
            parse_quantity("abc"),
            Err(QuantityError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_quantity("1.5"),
            Err(QuantityError::NotANumber("1.5".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(parse_quantity("0"), Err(QuantityError::NotPositive(0)));
        assert_eq!(parse_quantity("-4"), Err(QuantityError::NotPositive(-4)));
    }

    #[test]
    fn test_rejects_too_large() {
        assert_eq!(
            parse_quantity("4294967296"),
            Err(QuantityError::TooLarge("4294967296".to_string()))
        );
        assert_eq!(
            parse_quantity("99999999999999999999999"),
            Err(QuantityError::TooLarge("99999999999999999999999".to_string()))
        );
        assert_eq!(parse_quantity("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_huge_negative_is_not_positive() {
        assert_eq!(
            parse_quantity("-99999999999999999999"),
            Err(QuantityError::NotPositive(i64::MIN))
        );
        assert_eq!(parse_quantity("-"), Err(QuantityError::NotANumber("-".to_string())));
        assert_eq!(parse_quantity("+"), Err(QuantityError::NotANumber("+".to_string())));
        assert_eq!(
            parse_quantity("-12x"),
            Err(QuantityError::NotANumber("-12x".to_string()))
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(parse_quantity_or("abc", DEFAULT_QUANTITY), 1);
        assert_eq!(parse_quantity_or("xyz", 5), 5);
        assert_eq!(parse_quantity_or("8", 5), 8);
    }
}
