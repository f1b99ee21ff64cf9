//! Sanitizing typed amounts before they reach the calculator.
//!
//! Front ends must not call the calculator when [`parse_amount`] fails.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("amount has more than one decimal point")]
    MultipleDecimalPoints,
    #[error("amount has more than two decimal places")]
    TooManyFractionDigits,
    #[error("'{0}' is not a number")]
    Unparsable(String),
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Keep only ASCII digits and the decimal point, allowing at most one point
/// followed by at most two digits.
///
/// Everything else (currency signs, grouping commas, spaces, minus signs)
/// is dropped.
///
/// ```
/// use atm_fees::input::sanitize_amount;
///
/// assert_eq!(sanitize_amount("$1,200.50").unwrap(), "1200.50");
/// assert!(sanitize_amount("1.234").is_err());
/// ```
pub fn sanitize_amount(text: &str) -> Result<String, InputError> {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = filtered.split('.');
    let fraction = parts.nth(1);
    if parts.next().is_some() {
        return Err(InputError::MultipleDecimalPoints);
    }
    if fraction.is_some_and(|f| f.len() > 2) {
        return Err(InputError::TooManyFractionDigits);
    }
    Ok(filtered)
}

/// Sanitize `text` and parse it as a positive USD amount.
pub fn parse_amount(text: &str) -> Result<Decimal, InputError> {
    let cleaned = sanitize_amount(text)?;
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(InputError::Unparsable(text.to_string()));
    }

    // ".5" and "12." are accepted as 0.5 and 12.
    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };
    let amount: Decimal = normalized
        .parse()
        .map_err(|_| InputError::Unparsable(text.to_string()))?;

    if amount <= Decimal::ZERO {
        return Err(InputError::NotPositive);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sanitize_strips_noise() {
        assert_eq!(sanitize_amount(" $ 250 ").unwrap(), "250");
        assert_eq!(sanitize_amount("abc").unwrap(), "");
    }

    #[test]
    fn test_sanitize_rejects_second_point() {
        assert_eq!(sanitize_amount("1.2.3"), Err(InputError::MultipleDecimalPoints));
    }

    #[test]
    fn test_sanitize_limits_fraction() {
        assert_eq!(sanitize_amount("10.999"), Err(InputError::TooManyFractionDigits));
        assert_eq!(sanitize_amount("10.99").unwrap(), "10.99");
        assert_eq!(sanitize_amount("10.").unwrap(), "10.");
    }

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount("123.45").unwrap(), dec!(123.45));
        assert_eq!(parse_amount(".5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount("12.").unwrap(), dec!(12));
    }

    #[test]
    fn test_parse_drops_sign() {
        // The minus sign is filtered out like any other non-digit.
        assert_eq!(parse_amount("-5").unwrap(), dec!(5));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_amount("0"), Err(InputError::NotPositive));
        assert_eq!(parse_amount("0.00"), Err(InputError::NotPositive));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_amount(""), Err(InputError::Unparsable(_))));
        assert!(matches!(parse_amount("."), Err(InputError::Unparsable(_))));
        assert!(matches!(parse_amount("USD"), Err(InputError::Unparsable(_))));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "9".repeat(40);
        assert!(matches!(parse_amount(&huge), Err(InputError::Unparsable(_))));
    }
}
