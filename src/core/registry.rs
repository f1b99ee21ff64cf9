use crate::core::bank::{BankId, BankRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors arising from building bank records or a bank registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("ATM fee must not be negative, got {atm_fee} for bank {id}")]
    NegativeAtmFee { id: BankId, atm_fee: Decimal },
    #[error("maximum withdrawal must be positive, got {max_withdrawal} for bank {id}")]
    NonPositiveMaxWithdrawal { id: BankId, max_withdrawal: Decimal },
    #[error("bank {0} is listed more than once")]
    DuplicateBank(BankId),
    #[error("a bank registry needs at least one bank")]
    EmptyRegistry,
    #[error("unknown bank {0}")]
    UnknownBank(BankId),
}

/// Ordered, read-only table of the banks whose ATMs can be selected.
///
/// Order is display order only. Ids are unique.
///
/// # Examples
///
/// ```
/// use atm_fees::core::bank::BankId;
/// use atm_fees::core::registry::BankRegistry;
///
/// let registry = BankRegistry::standard();
/// assert_eq!(registry.len(), 4);
/// assert_eq!(registry.get(&BankId::new("banpro")).unwrap().name(), "Banpro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BankRegistry {
    banks: Vec<BankRecord>,
}

impl BankRegistry {
    /// Build a registry, rejecting an empty table or repeated ids.
    pub fn new(banks: Vec<BankRecord>) -> Result<Self, RegistryError> {
        if banks.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        let mut seen = HashSet::new();
        for bank in &banks {
            if !seen.insert(bank.id()) {
                return Err(RegistryError::DuplicateBank(bank.id().clone()));
            }
        }
        Ok(Self { banks })
    }

    /// The Nicaraguan ATM networks with their per-transaction limits.
    pub fn standard() -> Self {
        Self {
            banks: vec![
                BankRecord::new("bac", "BAC", dec!(5.00), dec!(600)),
                BankRecord::new("lafise", "Lafise", Decimal::ZERO, dec!(500)),
                BankRecord::new("banpro", "Banpro", Decimal::ZERO, dec!(800)),
                // BANCARED network limit
                BankRecord::new("ficohsa", "Ficohsa", Decimal::ZERO, dec!(600)),
            ],
        }
    }

    /// All banks in display order.
    pub fn banks(&self) -> &[BankRecord] {
        &self.banks
    }

    pub fn iter(&self) -> impl Iterator<Item = &BankRecord> {
        self.banks.iter()
    }

    pub fn get(&self, id: &BankId) -> Option<&BankRecord> {
        self.banks.iter().find(|b| b.id() == id)
    }

    /// Like [`get`](Self::get), but reports an unknown id as an error.
    pub fn require(&self, id: &BankId) -> Result<&BankRecord, RegistryError> {
        self.get(id).ok_or_else(|| RegistryError::UnknownBank(id.clone()))
    }

    /// The bank selected when the user has not picked one.
    pub fn first(&self) -> &BankRecord {
        // Never empty: both constructors guarantee at least one bank.
        &self.banks[0]
    }

    pub fn ids(&self) -> Vec<&BankId> {
        self.banks.iter().map(|b| b.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard bank table in display order.
pub fn list_banks() -> Vec<BankRecord> {
    BankRegistry::standard().banks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = BankRegistry::standard();
        let ids: Vec<&str> = registry.ids().into_iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["bac", "lafise", "banpro", "ficohsa"]);
        assert_eq!(registry.first().name(), "BAC");
    }

    #[test]
    fn test_standard_registry_invariants() {
        for bank in BankRegistry::standard().iter() {
            assert!(bank.atm_fee() >= Decimal::ZERO);
            assert!(bank.max_withdrawal() > Decimal::ZERO);
        }
    }

    #[test]
    fn test_standard_registry_terms() {
        let registry = BankRegistry::standard();
        let bac = registry.get(&BankId::new("bac")).unwrap();
        assert_eq!(bac.atm_fee(), dec!(5));
        assert_eq!(bac.max_withdrawal(), dec!(600));
        let lafise = registry.get(&BankId::new("lafise")).unwrap();
        assert_eq!(lafise.max_withdrawal(), dec!(500));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = BankRegistry::new(vec![
            BankRecord::new("bac", "BAC", dec!(5), dec!(600)),
            BankRecord::new("bac", "BAC again", dec!(0), dec!(300)),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicateBank(id)) if id.as_str() == "bac"));
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(
            BankRegistry::new(Vec::new()),
            Err(RegistryError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_list_banks_matches_standard() {
        assert_eq!(list_banks(), BankRegistry::standard().banks().to_vec());
    }

    #[test]
    fn test_unknown_bank() {
        let registry = BankRegistry::standard();
        assert!(registry.get(&BankId::new("citi")).is_none());
        let err = registry.require(&BankId::new("citi")).unwrap_err();
        assert_eq!(err.to_string(), "unknown bank citi");
    }
}
