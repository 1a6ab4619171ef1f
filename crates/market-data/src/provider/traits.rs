//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::{Candle, HistoryRange};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch daily history for a symbol over a named range.
    ///
    /// # Returns
    ///
    /// Candles ordered by timestamp ascending. An empty vector means the
    /// provider had no data for the symbol over the range; that is not an
    /// error at this layer.
    async fn get_history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<Candle>, MarketDataError>;

    /// Fetch daily history for a symbol over an explicit UTC window.
    ///
    /// # Arguments
    ///
    /// * `start` - Start of the window (inclusive)
    /// * `end` - End of the window (inclusive)
    ///
    /// # Returns
    ///
    /// Candles ordered by timestamp ascending; empty when no data exists.
    async fn get_history_window(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
