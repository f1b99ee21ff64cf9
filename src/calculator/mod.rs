//! Forward and inverse ATM fee calculations.
//!
//! - **withdrawal**: amount to withdraw → balance the account must hold
//! - **available**: account balance → amount that can be withdrawn
//!
//! Both directions are pure functions of a [`FeeSchedule`] and a
//! [`BankRecord`]. They never fail; callers validate inputs first
//! (see [`crate::input`]).

pub mod available;
pub mod withdrawal;

use crate::core::bank::BankRecord;
use crate::core::schedule::FeeSchedule;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use available::AvailableBalanceResult;
pub use withdrawal::WithdrawalFeeResult;

/// How [`WithdrawalFeeResult::total_required`] treats the conversion fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalPolicy {
    /// `total_required` always includes the conversion surcharge, whatever
    /// the toggle says. This is what the published breakdown screens show.
    #[default]
    AlwaysIncludeConversion,
    /// `total_required` includes the conversion surcharge only when
    /// conversion is requested.
    FollowToggle,
}

/// Fee calculator bound to one fee schedule.
///
/// # Examples
///
/// ```
/// use atm_fees::calculator::FeeCalculator;
/// use atm_fees::core::bank::BankRecord;
/// use rust_decimal_macros::dec;
///
/// let calc = FeeCalculator::default();
/// let bac = BankRecord::new("bac", "BAC", dec!(5), dec!(600));
///
/// let fees = calc.required_balance(dec!(100), &bac, true);
/// assert_eq!(fees.total_required, dec!(113.45));
///
/// let available = calc.available_to_withdraw(dec!(200), &bac, true);
/// assert_eq!(available.available_to_withdraw, dec!(182.19));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeCalculator {
    schedule: FeeSchedule,
    total_policy: TotalPolicy,
}

impl FeeCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self {
            schedule,
            total_policy: TotalPolicy::default(),
        }
    }

    pub fn with_total_policy(mut self, policy: TotalPolicy) -> Self {
        self.total_policy = policy;
        self
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn total_policy(&self) -> TotalPolicy {
        self.total_policy
    }
}

/// [`FeeCalculator::required_balance`] with the standard schedule.
pub fn compute_required_balance(
    amount: Decimal,
    bank: &BankRecord,
    include_conversion: bool,
) -> WithdrawalFeeResult {
    FeeCalculator::default().required_balance(amount, bank, include_conversion)
}

/// [`FeeCalculator::available_to_withdraw`] with the standard schedule.
pub fn compute_available_to_withdraw(
    balance: Decimal,
    bank: &BankRecord,
    include_conversion: bool,
) -> AvailableBalanceResult {
    FeeCalculator::default().available_to_withdraw(balance, bank, include_conversion)
}
