use crate::calculator::{FeeCalculator, TotalPolicy};
use crate::core::bank::BankRecord;
use crate::format::round_cents;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee breakdown for withdrawing a chosen amount.
///
/// Percentage fees and totals are rounded to cents. The withdrawal amount
/// and the flat fees are passed through as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalFeeResult {
    /// Amount the user wants to receive.
    pub withdrawal_amount: Decimal,
    /// Flat platform fee.
    pub payoneer_fee: Decimal,
    /// Flat fee of the selected bank's ATM.
    pub atm_fee: Decimal,
    /// Bank percentage fee on the amount.
    pub bank_fee: Decimal,
    /// Conversion percentage fee; zero when conversion is excluded.
    pub conversion_fee: Decimal,
    /// Balance needed including the conversion surcharge.
    pub total_required: Decimal,
    /// Balance needed without the conversion surcharge.
    pub total_without_conversion: Decimal,
}

impl WithdrawalFeeResult {
    /// The total a screen should show for the given toggle.
    pub fn displayed_total(&self, include_conversion: bool) -> Decimal {
        if include_conversion {
            self.total_required
        } else {
            self.total_without_conversion
        }
    }

    /// Whether the requested amount is above what the bank dispenses in one
    /// transaction.
    pub fn exceeds_bank_limit(&self, bank: &BankRecord) -> bool {
        self.withdrawal_amount > bank.max_withdrawal()
    }
}

impl FeeCalculator {
    /// Compute the balance required to withdraw `amount` at `bank`.
    ///
    /// `amount` is expected to be positive; it is not validated, and
    /// non-positive input yields a meaningless (but well-defined) breakdown.
    pub fn required_balance(
        &self,
        amount: Decimal,
        bank: &BankRecord,
        include_conversion: bool,
    ) -> WithdrawalFeeResult {
        let schedule = &self.schedule;
        let payoneer_fee = schedule.fixed_withdrawal_fee;
        let atm_fee = bank.atm_fee();
        let bank_fee = amount * schedule.bank_fee_rate;
        let conversion_fee = if include_conversion {
            amount * schedule.conversion_rate
        } else {
            Decimal::ZERO
        };

        let total_without_conversion = amount + payoneer_fee + atm_fee + bank_fee;
        let total_required = match self.total_policy {
            TotalPolicy::AlwaysIncludeConversion => {
                total_without_conversion + amount * schedule.conversion_rate
            }
            TotalPolicy::FollowToggle => total_without_conversion + conversion_fee,
        };

        WithdrawalFeeResult {
            withdrawal_amount: amount,
            payoneer_fee,
            atm_fee,
            bank_fee: round_cents(bank_fee),
            conversion_fee: round_cents(conversion_fee),
            total_required: round_cents(total_required),
            total_without_conversion: round_cents(total_without_conversion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::FeeSchedule;
    use rust_decimal_macros::dec;

    fn bac() -> BankRecord {
        BankRecord::new("bac", "BAC", dec!(5), dec!(600))
    }

    fn lafise() -> BankRecord {
        BankRecord::new("lafise", "Lafise", Decimal::ZERO, dec!(500))
    }

    #[test]
    fn test_hundred_at_bac_with_conversion() {
        let r = FeeCalculator::default().required_balance(dec!(100), &bac(), true);
        assert_eq!(r.withdrawal_amount, dec!(100));
        assert_eq!(r.payoneer_fee, dec!(3.15));
        assert_eq!(r.atm_fee, dec!(5));
        assert_eq!(r.bank_fee, dec!(1.80));
        assert_eq!(r.conversion_fee, dec!(3.50));
        assert_eq!(r.total_without_conversion, dec!(109.95));
        assert_eq!(r.total_required, dec!(113.45));
        assert_eq!(r.displayed_total(true), dec!(113.45));
    }

    #[test]
    fn test_without_conversion_keeps_legacy_total() {
        let r = FeeCalculator::default().required_balance(dec!(100), &bac(), false);
        assert_eq!(r.conversion_fee, Decimal::ZERO);
        assert_eq!(r.total_without_conversion, dec!(109.95));
        // The surcharge is still part of total_required under the default policy.
        assert_eq!(r.total_required, dec!(113.45));
        assert_eq!(r.displayed_total(false), dec!(109.95));
    }

    #[test]
    fn test_follow_toggle_policy() {
        let calc = FeeCalculator::default().with_total_policy(TotalPolicy::FollowToggle);

        let off = calc.required_balance(dec!(100), &bac(), false);
        assert_eq!(off.total_required, dec!(109.95));
        assert_eq!(off.total_required, off.total_without_conversion);

        let on = calc.required_balance(dec!(100), &bac(), true);
        assert_eq!(on.total_required, dec!(113.45));
    }

    #[test]
    fn test_fees_rounded_to_cents() {
        // 123.45 * 0.018 = 2.2221, 123.45 * 0.035 = 4.32075
        let r = FeeCalculator::default().required_balance(dec!(123.45), &lafise(), true);
        assert_eq!(r.bank_fee, dec!(2.22));
        assert_eq!(r.conversion_fee, dec!(4.32));
        // 123.45 + 3.15 + 0 + 2.2221 = 128.8221
        assert_eq!(r.total_without_conversion, dec!(128.82));
        // 128.8221 + 4.32075 = 133.14285
        assert_eq!(r.total_required, dec!(133.14));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FeeSchedule {
            fixed_withdrawal_fee: dec!(2),
            conversion_rate: dec!(0.05),
            bank_fee_rate: Decimal::ZERO,
            balance_inquiry_fee: Decimal::ZERO,
        };
        let r = FeeCalculator::new(schedule).required_balance(dec!(50), &lafise(), true);
        assert_eq!(r.bank_fee, Decimal::ZERO);
        assert_eq!(r.conversion_fee, dec!(2.50));
        assert_eq!(r.total_without_conversion, dec!(52));
        assert_eq!(r.total_required, dec!(54.50));
    }

    #[test]
    fn test_exceeds_bank_limit() {
        let calc = FeeCalculator::default();
        assert!(calc.required_balance(dec!(600.01), &bac(), true).exceeds_bank_limit(&bac()));
        assert!(!calc.required_balance(dec!(600), &bac(), true).exceeds_bank_limit(&bac()));
    }

    #[test]
    fn test_zero_amount_is_total() {
        let r = FeeCalculator::default().required_balance(Decimal::ZERO, &bac(), true);
        assert_eq!(r.total_without_conversion, dec!(8.15));
        assert_eq!(r.total_required, dec!(8.15));
    }
}
