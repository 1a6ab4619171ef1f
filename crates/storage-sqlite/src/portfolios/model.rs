//! Database model for portfolios.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use paperfolio_core::constants::DECIMAL_PRECISION;
use paperfolio_core::portfolios::{NewPortfolio, Portfolio};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for portfolios
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::portfolios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioDB {
    pub id: String,
    pub user_id: String,
    pub cash_balance: String,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion implementations
impl From<PortfolioDB> for Portfolio {
    fn from(db: PortfolioDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            cash_balance: parse_decimal(&db.cash_balance, "cash_balance"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<NewPortfolio> for PortfolioDB {
    fn from(domain: NewPortfolio) -> Self {
        let now = format_datetime(Utc::now());
        Self {
            id: String::new(), // Assigned by the repository
            user_id: domain.user_id,
            cash_balance: domain.cash_balance.round_dp(DECIMAL_PRECISION).to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
