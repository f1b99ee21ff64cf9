use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as US dollars with exactly two decimals, no grouping.
///
/// # Examples
///
/// ```
/// use atm_fees::format::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(12.3)), "$12.30");
/// assert_eq!(format_currency(dec!(9.999)), "$10.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = round_cents(amount);
    cents.rescale(2);
    format!("${}", cents)
}
