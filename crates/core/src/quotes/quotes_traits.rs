use async_trait::async_trait;
use rust_decimal::Decimal;

use paperfolio_market_data::{Candle, HistoryRange};

use crate::Result;

/// Trait defining the contract for quote lookups.
///
/// Wraps the market data provider with the pricing rules the rest of the
/// application relies on: the latest price is the close of the most recent
/// daily candle, and a missing series is an error here rather than an
/// empty vector.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Returns the most recent daily close for a symbol.
    async fn get_latest_price(&self, symbol: &str) -> Result<Decimal>;

    /// Returns the most recent daily close, retrying over a trailing
    /// twelve month window when the one day sample is empty and the
    /// caller asked for a one year range.
    async fn get_latest_price_with_fallback(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Decimal>;

    /// Returns the daily candle series for a symbol over a range.
    ///
    /// An empty vector means the provider had no data; callers decide
    /// whether that is an error.
    async fn get_history(&self, symbol: &str, range: HistoryRange) -> Result<Vec<Candle>>;
}
