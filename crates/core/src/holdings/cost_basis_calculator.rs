//! Aggregate cost basis over a symbol's trade log.

use rust_decimal::Decimal;

use crate::trades::{Trade, TradeSide};

/// Net shares and net cost of an open position.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBasis {
    pub total_shares: Decimal,
    pub total_cost: Decimal,
    pub average_cost: Decimal,
}

/// Computes the net cost basis for one symbol from its full trade log.
///
/// Buys add shares and cash spent; sells subtract shares and the cash
/// received at the sale price. The average is net cost over net shares,
/// so a profitable sale lowers it and a losing sale raises it. A closed
/// or empty position has an average of zero.
pub fn cost_basis(trades: &[Trade]) -> CostBasis {
    let mut total_shares = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    for trade in trades {
        let value = trade.shares * trade.price;
        match trade.side {
            TradeSide::Buy => {
                total_shares += trade.shares;
                total_cost += value;
            }
            TradeSide::Sell => {
                total_shares -= trade.shares;
                total_cost -= value;
            }
        }
    }

    let average_cost = if total_shares > Decimal::ZERO {
        total_cost / total_shares
    } else {
        Decimal::ZERO
    };

    CostBasis {
        total_shares,
        total_cost,
        average_cost,
    }
}
