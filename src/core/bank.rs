use crate::core::registry::RegistryError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short, stable identifier of a bank whose ATMs can be used for withdrawals.
///
/// # Examples
///
/// ```
/// use atm_fees::core::bank::BankId;
///
/// let bac = BankId::new("bac");
/// let lafise = BankId::new("lafise");
/// assert_ne!(bac, lafise);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(String);

impl BankId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BankId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BankId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A bank's ATM terms: the flat fee its machines charge and the largest
/// amount a single transaction may dispense.
///
/// Records are immutable once created. Amounts are in USD.
///
/// # Examples
///
/// ```
/// use atm_fees::core::bank::BankRecord;
/// use rust_decimal_macros::dec;
///
/// let bac = BankRecord::new("bac", "BAC", dec!(5), dec!(600));
/// assert_eq!(bac.atm_fee(), dec!(5));
/// assert_eq!(bac.max_withdrawal(), dec!(600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankRecord {
    id: BankId,
    name: String,
    /// Flat fee charged by the ATM per withdrawal. Never negative.
    atm_fee: Decimal,
    /// Cap on a single withdrawal. Always positive.
    max_withdrawal: Decimal,
}

impl BankRecord {
    /// Create a bank record.
    ///
    /// # Panics
    ///
    /// Panics if `atm_fee` is negative or `max_withdrawal` is not positive.
    pub fn new(
        id: impl Into<BankId>,
        name: impl Into<String>,
        atm_fee: Decimal,
        max_withdrawal: Decimal,
    ) -> Self {
        assert!(
            atm_fee >= Decimal::ZERO,
            "ATM fee must not be negative, got {}",
            atm_fee
        );
        assert!(
            max_withdrawal > Decimal::ZERO,
            "Maximum withdrawal must be positive, got {}",
            max_withdrawal
        );
        Self {
            id: id.into(),
            name: name.into(),
            atm_fee,
            max_withdrawal,
        }
    }

    /// Create a bank record from untrusted data, reporting invalid terms
    /// instead of panicking.
    pub fn try_new(
        id: impl Into<BankId>,
        name: impl Into<String>,
        atm_fee: Decimal,
        max_withdrawal: Decimal,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        if atm_fee < Decimal::ZERO {
            return Err(RegistryError::NegativeAtmFee { id, atm_fee });
        }
        if max_withdrawal <= Decimal::ZERO {
            return Err(RegistryError::NonPositiveMaxWithdrawal { id, max_withdrawal });
        }
        Ok(Self {
            id,
            name: name.into(),
            atm_fee,
            max_withdrawal,
        })
    }

    // --- Accessors ---

    pub fn id(&self) -> &BankId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atm_fee(&self) -> Decimal {
        self.atm_fee
    }

    pub fn max_withdrawal(&self) -> Decimal {
        self.max_withdrawal
    }
}

impl fmt::Display for BankRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
