//! Database model for trades.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use paperfolio_core::trades::{Trade, TradeSide};

use crate::utils::{parse_datetime, parse_decimal};

/// Database model for trades
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub shares: String,
    pub price: String,
    pub side: String,
    pub executed_at: String,
}

impl From<TradeDB> for Trade {
    fn from(db: TradeDB) -> Self {
        // Rows are only ever written from TradeSide::as_str, so a parse
        // failure means the row was edited outside the application.
        let side = db.side.parse::<TradeSide>().unwrap_or_else(|_| {
            log::error!("Invalid trade side '{}' for trade {}", db.side, db.id);
            TradeSide::Buy
        });

        Self {
            id: db.id,
            portfolio_id: db.portfolio_id,
            symbol: db.symbol,
            shares: parse_decimal(&db.shares, "shares"),
            price: parse_decimal(&db.price, "price"),
            side,
            executed_at: parse_datetime(&db.executed_at, "executed_at"),
        }
    }
}
