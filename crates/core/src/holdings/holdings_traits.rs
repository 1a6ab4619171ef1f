use async_trait::async_trait;

use paperfolio_market_data::HistoryRange;

use crate::holdings::holdings_model::{Holding, HoldingView};
use crate::Result;

/// Trait defining the contract for holding repositories.
///
/// Holdings are only written as part of trade application, which lives on
/// the trade repository; this trait is read-only.
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Returns every open position in a portfolio, ordered by symbol.
    fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    /// Returns the position in one symbol, if open.
    fn get_by_symbol(&self, portfolio_id: &str, symbol: &str) -> Result<Option<Holding>>;
}

/// Trait defining the contract for holdings valuation.
#[async_trait]
pub trait HoldingsValuationServiceTrait: Send + Sync {
    /// Prices every open position and computes its cost basis figures.
    ///
    /// The range is the dashboard's selected history range; it only
    /// affects how hard the price lookup tries before failing.
    async fn build_holding_views(
        &self,
        portfolio_id: &str,
        range: HistoryRange,
    ) -> Result<Vec<HoldingView>>;
}
