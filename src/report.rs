//! Human-readable breakdowns of calculation results.

use crate::calculator::{AvailableBalanceResult, WithdrawalFeeResult};
use crate::core::bank::BankRecord;
use crate::format::format_currency;
use serde::Serialize;
use std::fmt;

/// Breakdown of what a withdrawal costs, as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalReport<'a> {
    pub bank: &'a BankRecord,
    pub include_conversion: bool,
    pub result: WithdrawalFeeResult,
}

impl<'a> WithdrawalReport<'a> {
    pub fn new(
        bank: &'a BankRecord,
        include_conversion: bool,
        result: WithdrawalFeeResult,
    ) -> Self {
        Self {
            bank,
            include_conversion,
            result,
        }
    }
}

impl fmt::Display for WithdrawalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "=== Withdrawal at {} ===", self.bank.name())?;
        writeln!(f, "Amount to withdraw:  {}", format_currency(r.withdrawal_amount))?;
        writeln!(f, "Platform fee:        {}", format_currency(r.payoneer_fee))?;
        writeln!(
            f,
            "ATM fee ({}):{:width$}{}",
            self.bank.name(),
            "",
            format_currency(r.atm_fee),
            width = 10usize.saturating_sub(self.bank.name().len()).max(1)
        )?;
        writeln!(f, "Bank fee:            {}", format_currency(r.bank_fee))?;
        if self.include_conversion {
            writeln!(f, "Conversion fee:      {}", format_currency(r.conversion_fee))?;
        }
        writeln!(
            f,
            "Required balance:    {}",
            format_currency(r.displayed_total(self.include_conversion))
        )?;

        if self.include_conversion {
            writeln!(
                f,
                "\nWithout conversion:  {}",
                format_currency(r.total_without_conversion)
            )?;
        }
        if r.exceeds_bank_limit(self.bank) {
            writeln!(
                f,
                "\nWarning: {} dispenses at most {} per withdrawal",
                self.bank.name(),
                format_currency(self.bank.max_withdrawal())
            )?;
        }
        Ok(())
    }
}

/// Breakdown of what a balance yields, as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableReport<'a> {
    pub bank: &'a BankRecord,
    pub include_conversion: bool,
    pub result: AvailableBalanceResult,
}

impl<'a> AvailableReport<'a> {
    pub fn new(
        bank: &'a BankRecord,
        include_conversion: bool,
        result: AvailableBalanceResult,
    ) -> Self {
        Self {
            bank,
            include_conversion,
            result,
        }
    }
}

impl fmt::Display for AvailableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "=== Available at {} ===", self.bank.name())?;
        writeln!(f, "Balance:             {}", format_currency(r.balance))?;
        writeln!(f, "Platform fee:       -{}", format_currency(r.payoneer_fee))?;
        writeln!(
            f,
            "ATM fee ({}):{:width$}-{}",
            self.bank.name(),
            "",
            format_currency(r.atm_fee),
            width = 9usize.saturating_sub(self.bank.name().len()).max(1)
        )?;
        writeln!(f, "Bank fee:           -{}", format_currency(r.bank_fee))?;
        if self.include_conversion {
            writeln!(f, "Conversion fee:     -{}", format_currency(r.conversion_fee))?;
        }
        writeln!(
            f,
            "Available:           {}",
            format_currency(r.available_to_withdraw)
        )?;

        if self.include_conversion && r.available_without_conversion > r.available_to_withdraw {
            writeln!(
                f,
                "\nWithout conversion:  {}",
                format_currency(r.available_without_conversion)
            )?;
        }
        if r.is_limited_by_bank {
            writeln!(
                f,
                "\nLimited to the {} maximum of {} per withdrawal",
                self.bank.name(),
                format_currency(r.max_withdrawal)
            )?;
        }
        if r.is_insufficient() {
            writeln!(f, "\nWarning: balance does not cover the fees")?;
        }
        Ok(())
    }
}
