use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from validating a fee schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("fee schedule value {field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: Decimal },
}

/// Platform-wide fee parameters of the payment account.
///
/// Flat fees are in USD; rates are fractions of the withdrawn amount
/// (0.035 = 3.5%).
///
/// # Examples
///
/// ```
/// use atm_fees::core::schedule::FeeSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = FeeSchedule::standard();
/// assert_eq!(schedule.fixed_withdrawal_fee, dec!(3.15));
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Flat fee charged by the platform per ATM withdrawal.
    pub fixed_withdrawal_fee: Decimal,
    /// Rate applied only when the withdrawal is converted to local currency.
    pub conversion_rate: Decimal,
    /// Rate always applied by the issuing bank.
    pub bank_fee_rate: Decimal,
    /// Flat fee for an ATM balance inquiry. Not used by any calculation.
    pub balance_inquiry_fee: Decimal,
}

impl FeeSchedule {
    /// The schedule currently published for ATM withdrawals in Nicaragua.
    pub fn standard() -> Self {
        Self {
            fixed_withdrawal_fee: dec!(3.15),
            conversion_rate: dec!(0.035),
            bank_fee_rate: dec!(0.018),
            balance_inquiry_fee: dec!(1.00),
        }
    }

    /// Check that no fee or rate is negative.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let fields = [
            ("fixed_withdrawal_fee", self.fixed_withdrawal_fee),
            ("conversion_rate", self.conversion_rate),
            ("bank_fee_rate", self.bank_fee_rate),
            ("balance_inquiry_fee", self.balance_inquiry_fee),
        ];
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(ScheduleError::NegativeValue { field, value });
            }
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schedule() {
        let s = FeeSchedule::standard();
        assert_eq!(s.fixed_withdrawal_fee, dec!(3.15));
        assert_eq!(s.conversion_rate, dec!(0.035));
        assert_eq!(s.bank_fee_rate, dec!(0.018));
        assert_eq!(s.balance_inquiry_fee, dec!(1));
        assert_eq!(FeeSchedule::default(), s);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let s = FeeSchedule {
            bank_fee_rate: dec!(-0.01),
            ..FeeSchedule::standard()
        };
        match s.validate() {
            Err(ScheduleError::NegativeValue { field, .. }) => {
                assert_eq!(field, "bank_fee_rate")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_zero_schedule_is_valid() {
        let s = FeeSchedule {
            fixed_withdrawal_fee: Decimal::ZERO,
            conversion_rate: Decimal::ZERO,
            bank_fee_rate: Decimal::ZERO,
            balance_inquiry_fee: Decimal::ZERO,
        };
        assert!(s.validate().is_ok());
    }
}
