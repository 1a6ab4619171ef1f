//! Holding domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A position in one symbol within a portfolio.
///
/// Holdings exist only while the position is open; selling down to zero
/// shares removes the row entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub shares: Decimal,
}

/// A holding enriched with live price and cost basis figures, ready for
/// display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub symbol: String,
    pub shares: Decimal,
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub average_cost: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_per_share: Decimal,
    pub percent_gain: Decimal,
    /// Share of total portfolio value, percent. Zero until the portfolio
    /// total is known; the dashboard assembly fills it in.
    pub weight_pct: Decimal,
}
