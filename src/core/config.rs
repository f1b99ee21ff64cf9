//! Loading fee schedules and bank tables from JSON.
//!
//! ```json
//! {
//!   "schedule": {
//!     "fixed_withdrawal_fee": "3.15",
//!     "conversion_rate": "0.035",
//!     "bank_fee_rate": "0.018",
//!     "balance_inquiry_fee": "1.00"
//!   },
//!   "banks": [
//!     { "id": "bac", "name": "BAC", "atm_fee": "5.00", "max_withdrawal": "600" }
//!   ]
//! }
//! ```
//!
//! `schedule` may be omitted, in which case [`FeeSchedule::standard`] is used.

use crate::calculator::FeeCalculator;
use crate::core::bank::BankRecord;
use crate::core::registry::{BankRegistry, RegistryError};
use crate::core::schedule::{FeeSchedule, ScheduleError};
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

#[derive(Deserialize)]
struct BankInput {
    id: String,
    name: String,
    atm_fee: Decimal,
    max_withdrawal: Decimal,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    schedule: FeeSchedule,
    banks: Vec<BankInput>,
}

/// A validated fee schedule together with the banks it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeeConfig {
    pub schedule: FeeSchedule,
    pub banks: BankRegistry,
}

impl FeeConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(content)?;
        file.schedule.validate()?;

        let banks = file
            .banks
            .into_iter()
            .map(|b| BankRecord::try_new(b.id, b.name, b.atm_fee, b.max_withdrawal))
            .collect::<Result<Vec<_>, _>>()?;
        let banks = BankRegistry::new(banks)?;

        debug!(
            "loaded fee config: {} banks, fixed fee {}",
            banks.len(),
            file.schedule.fixed_withdrawal_fee
        );
        Ok(Self {
            schedule: file.schedule,
            banks,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("reading fee config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn calculator(&self) -> FeeCalculator {
        FeeCalculator::new(self.schedule)
    }
}
