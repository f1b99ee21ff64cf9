use crate::calculator::FeeCalculator;
use crate::core::bank::BankRecord;
use crate::format::round_cents;
use log::trace;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a balance yields at a given bank, after fees and the bank's cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableBalanceResult {
    /// The balance the calculation started from.
    pub balance: Decimal,
    pub payoneer_fee: Decimal,
    pub atm_fee: Decimal,
    /// Bank percentage fee on `available_to_withdraw`.
    pub bank_fee: Decimal,
    /// Conversion fee on `available_to_withdraw`; zero when not converting.
    pub conversion_fee: Decimal,
    /// Amount obtainable under the active conversion toggle.
    pub available_to_withdraw: Decimal,
    /// Amount obtainable when not converting.
    pub available_without_conversion: Decimal,
    /// The bank's per-transaction cap.
    pub max_withdrawal: Decimal,
    /// True when either variant had to be lowered to the cap.
    pub is_limited_by_bank: bool,
}

impl AvailableBalanceResult {
    /// The balance does not even cover the flat fees.
    pub fn is_insufficient(&self) -> bool {
        self.available_to_withdraw <= Decimal::ZERO
    }

    /// Cash given up by converting instead of withdrawing dollars.
    /// Zero when conversion is off.
    pub fn conversion_cost(&self) -> Decimal {
        self.available_without_conversion - self.available_to_withdraw
    }
}

impl FeeCalculator {
    /// Compute how much can be withdrawn at `bank` from `balance`.
    ///
    /// Solves `balance = W + flat fees + W * rates` for `W`, once with the
    /// conversion rate and once without. Each solution is floored at zero,
    /// capped at the bank's maximum and rounded to cents. The displayed
    /// percentage fees are recomputed from the selected amount so the
    /// breakdown adds up.
    pub fn available_to_withdraw(
        &self,
        balance: Decimal,
        bank: &BankRecord,
        include_conversion: bool,
    ) -> AvailableBalanceResult {
        let schedule = &self.schedule;
        let payoneer_fee = schedule.fixed_withdrawal_fee;
        let atm_fee = bank.atm_fee();
        let max_withdrawal = bank.max_withdrawal();

        let after_flat_fees = balance - payoneer_fee - atm_fee;
        let multiplier_with = Decimal::ONE + schedule.bank_fee_rate + schedule.conversion_rate;
        let multiplier_without = Decimal::ONE + schedule.bank_fee_rate;

        let with_conversion = solve(after_flat_fees, multiplier_with).max(Decimal::ZERO);
        let without_conversion = solve(after_flat_fees, multiplier_without).max(Decimal::ZERO);
        trace!(
            "balance {} at {}: raw available {} with conversion, {} without",
            balance,
            bank.id(),
            with_conversion,
            without_conversion
        );

        let is_limited_by_bank =
            with_conversion > max_withdrawal || without_conversion > max_withdrawal;
        if is_limited_by_bank {
            trace!("capping at {} maximum {}", bank.id(), max_withdrawal);
        }

        let with_conversion = round_cents(with_conversion.min(max_withdrawal));
        let without_conversion = round_cents(without_conversion.min(max_withdrawal));

        let available_to_withdraw = if include_conversion {
            with_conversion
        } else {
            without_conversion
        };
        let bank_fee = available_to_withdraw * schedule.bank_fee_rate;
        let conversion_fee = if include_conversion {
            available_to_withdraw * schedule.conversion_rate
        } else {
            Decimal::ZERO
        };

        AvailableBalanceResult {
            balance,
            payoneer_fee,
            atm_fee,
            bank_fee: round_cents(bank_fee),
            conversion_fee: round_cents(conversion_fee),
            available_to_withdraw,
            available_without_conversion: without_conversion,
            max_withdrawal,
            is_limited_by_bank,
        }
    }
}

/// `amount / multiplier`. The multiplier is at least one for any schedule
/// that passes validation; a zero multiplier yields zero.
fn solve(amount: Decimal, multiplier: Decimal) -> Decimal {
    amount.checked_div(multiplier).unwrap_or(Decimal::ZERO)
}
