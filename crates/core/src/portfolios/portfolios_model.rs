//! Portfolio domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing one user's paper portfolio.
///
/// Every user has exactly one portfolio; the cash balance funds buys and
/// absorbs sale proceeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    pub cash_balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for provisioning a new portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub user_id: String,
    pub cash_balance: Decimal,
}

impl NewPortfolio {
    /// Validates the new portfolio data.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "User ID cannot be empty".to_string(),
            )));
        }
        if self.cash_balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Opening cash balance cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
