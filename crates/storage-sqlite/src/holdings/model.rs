//! Database model for holdings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use paperfolio_core::holdings::Holding;

use crate::utils::parse_decimal;

/// Database model for holdings
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub shares: String,
}

impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            id: db.id,
            portfolio_id: db.portfolio_id,
            symbol: db.symbol,
            shares: parse_decimal(&db.shares, "shares"),
        }
    }
}
