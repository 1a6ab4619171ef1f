//! Database model for portfolio snapshots.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use paperfolio_core::constants::DECIMAL_PRECISION;
use paperfolio_core::performance::{NewSnapshot, PortfolioSnapshot};

use crate::utils::{format_date, parse_date, parse_decimal};

/// Database model for portfolio snapshots
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::portfolio_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: String,
    pub total_value: String,
}

impl From<PortfolioSnapshotDB> for PortfolioSnapshot {
    fn from(db: PortfolioSnapshotDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            snapshot_date: parse_date(&db.snapshot_date, "snapshot_date"),
            total_value: parse_decimal(&db.total_value, "total_value"),
        }
    }
}

impl From<NewSnapshot> for PortfolioSnapshotDB {
    fn from(snapshot: NewSnapshot) -> Self {
        Self {
            id: String::new(), // Assigned by the repository
            user_id: snapshot.user_id,
            snapshot_date: format_date(snapshot.snapshot_date),
            total_value: snapshot
                .total_value
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
        }
    }
}
