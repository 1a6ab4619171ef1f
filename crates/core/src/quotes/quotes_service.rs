use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::debug;
use rust_decimal::Decimal;

use paperfolio_market_data::{Candle, HistoryRange, MarketDataError, MarketDataProvider};

use crate::quotes::quotes_traits::QuoteServiceTrait;
use crate::Result;

/// Days in the fallback pricing window for thinly traded symbols.
const FALLBACK_WINDOW_DAYS: i64 = 365;

/// Service for fetching prices and candle history from the market data
/// provider.
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    fn latest_close(candles: &[Candle]) -> Option<Decimal> {
        candles.last().map(|candle| candle.close)
    }

    fn no_data(symbol: &str, range: &str) -> MarketDataError {
        MarketDataError::NoData {
            symbol: symbol.to_string(),
            range: range.to_string(),
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_latest_price(&self, symbol: &str) -> Result<Decimal> {
        let candles = self.provider.get_history(symbol, HistoryRange::OneDay).await?;
        Self::latest_close(&candles).ok_or_else(|| Self::no_data(symbol, "1d").into())
    }

    async fn get_latest_price_with_fallback(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Decimal> {
        let candles = self.provider.get_history(symbol, HistoryRange::OneDay).await?;
        if let Some(close) = Self::latest_close(&candles) {
            return Ok(close);
        }

        // Some symbols have gaps in daily data; over the one year view we
        // widen to a trailing twelve month window before giving up.
        if range == HistoryRange::OneYear {
            debug!("No 1d data for {}, retrying over 12mo window", symbol);
            let end = Utc::now();
            let start = end - Duration::days(FALLBACK_WINDOW_DAYS);
            let candles = self.provider.get_history_window(symbol, start, end).await?;
            return Self::latest_close(&candles).ok_or_else(|| Self::no_data(symbol, "12mo").into());
        }

        Err(Self::no_data(symbol, "1d").into())
    }

    async fn get_history(&self, symbol: &str, range: HistoryRange) -> Result<Vec<Candle>> {
        Ok(self.provider.get_history(symbol, range).await?)
    }
}
