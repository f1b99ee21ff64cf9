//! # atm-fees
//!
//! ATM withdrawal fee calculator for a cross-border payment account used
//! at Nicaraguan ATMs.
//!
//! Answers two inverse questions: how much must be in the account to
//! withdraw a given amount, and how much can be withdrawn from a given
//! balance.
//!
//! ## Architecture
//!
//! - **core**: Bank records, the bank registry, the platform fee schedule, JSON config
//! - **calculator**: Forward (amount → balance) and inverse (balance → amount) fee math
//! - **format**: Cent rounding and `$0.00` currency rendering
//! - **input**: Sanitizing typed amounts before calculation
//! - **report**: Text breakdowns of calculation results

pub mod calculator;
pub mod core;
pub mod format;
pub mod input;
pub mod report;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::calculator::{
        compute_available_to_withdraw, compute_required_balance, AvailableBalanceResult,
        FeeCalculator, TotalPolicy, WithdrawalFeeResult,
    };
    pub use crate::core::bank::{BankId, BankRecord};
    pub use crate::core::config::FeeConfig;
    pub use crate::core::registry::{list_banks, BankRegistry};
    pub use crate::core::schedule::FeeSchedule;
    pub use crate::format::format_currency;
    pub use crate::input::parse_amount;
}
