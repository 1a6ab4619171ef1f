//! Realized profit and loss over the trade log.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::trades::trades_model::{Trade, TradeSide};

/// One trade log entry with its realized result, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryRow {
    pub symbol: String,
    pub side: TradeSide,
    pub shares: Decimal,
    pub price: Decimal,
    pub executed_at: DateTime<Utc>,
    /// Realized profit or loss of a sale against the running average
    /// cost at that moment. Buys have no realized result.
    pub realized_profit_loss: Option<Decimal>,
}

struct Position {
    shares: Decimal,
    average_cost: Decimal,
}

/// Annotates a portfolio's trade log with per-sale realized profit.
///
/// The log must be ordered oldest first. Each buy folds its cost into a
/// running weighted average for the symbol; each sell realizes the gap
/// between its price and that average, without moving the average. The
/// result is returned newest first for display.
pub fn build_trade_history(trades: &[Trade]) -> Vec<TradeHistoryRow> {
    let mut positions: HashMap<&str, Position> = HashMap::new();
    let mut rows = Vec::with_capacity(trades.len());

    for trade in trades {
        let position = positions.entry(trade.symbol.as_str()).or_insert(Position {
            shares: Decimal::ZERO,
            average_cost: Decimal::ZERO,
        });

        let realized_profit_loss = match trade.side {
            TradeSide::Buy => {
                let total_cost =
                    position.average_cost * position.shares + trade.price * trade.shares;
                position.shares += trade.shares;
                position.average_cost = if position.shares > Decimal::ZERO {
                    total_cost / position.shares
                } else {
                    Decimal::ZERO
                };
                None
            }
            TradeSide::Sell => {
                let realized = (trade.price - position.average_cost) * trade.shares;
                position.shares -= trade.shares;
                Some(realized.round_dp(DISPLAY_DECIMAL_PRECISION))
            }
        };

        rows.push(TradeHistoryRow {
            symbol: trade.symbol.clone(),
            side: trade.side,
            shares: trade.shares,
            price: trade.price,
            executed_at: trade.executed_at,
            realized_profit_loss,
        });
    }

    rows.reverse();
    rows
}
