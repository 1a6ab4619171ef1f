use async_trait::async_trait;

use crate::trades::trades_model::{NewTrade, Trade, TradeApplication};
use crate::Result;

/// Trait defining the contract for trade repositories.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    /// Returns every trade for a portfolio, oldest first.
    fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Trade>>;

    /// Returns a portfolio's trades in one symbol, oldest first.
    fn get_by_portfolio_and_symbol(&self, portfolio_id: &str, symbol: &str) -> Result<Vec<Trade>>;

    /// Applies a trade atomically: cash balance, holding change and the
    /// appended trade row either all commit or none do.
    async fn apply_trade(&self, application: TradeApplication) -> Result<Trade>;
}

/// Trait defining the contract for trade execution.
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    /// Validates and executes a trade for the given user's portfolio.
    ///
    /// Fetches the live price, checks cash (buys) or held shares (sells)
    /// and hands the computed transition to the repository.
    async fn execute_trade(&self, user_id: &str, new_trade: NewTrade) -> Result<Trade>;
}
