//! Yahoo Finance market data provider.
//!
//! Fetches daily OHLCV history for equities and ETFs (e.g. AAPL, SHOP.TO)
//! through the Yahoo Finance chart API.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::{debug, warn};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{Candle, HistoryRange};
use crate::provider::MarketDataProvider;

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Convert a Yahoo quote to our Candle model.
    fn yahoo_quote_to_candle(yahoo_quote: yahoo::Quote) -> Result<Candle, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        // Close price is required
        let close = Decimal::from_f64_retain(yahoo_quote.close).ok_or_else(|| {
            MarketDataError::ValidationFailed {
                message: format!(
                    "Failed to convert close price {} to Decimal",
                    yahoo_quote.close
                ),
            }
        })?;

        Ok(Candle {
            timestamp,
            open: Decimal::from_f64_retain(yahoo_quote.open),
            high: Decimal::from_f64_retain(yahoo_quote.high),
            low: Decimal::from_f64_retain(yahoo_quote.low),
            close,
            volume: Decimal::from_u64(yahoo_quote.volume),
        })
    }

    /// Collect a Yahoo chart response into candles, skipping rows that
    /// fail conversion. An exhausted response maps to an empty series.
    fn collect_candles(
        symbol: &str,
        response: yahoo::YResponse,
    ) -> Result<Vec<Candle>, MarketDataError> {
        match response.quotes() {
            Ok(yahoo_quotes) => {
                let candles: Vec<Candle> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match Self::yahoo_quote_to_candle(q) {
                        Ok(candle) => Some(candle),
                        Err(e) => {
                            warn!("Skipping {} quote due to conversion error: {:?}", symbol, e);
                            None
                        }
                    })
                    .collect();
                Ok(candles)
            }
            Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => Ok(vec![]),
            Err(e) => Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn get_history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<Candle>, MarketDataError> {
        debug!("Fetching {} history for {} from Yahoo", range, symbol);

        let response = match self
            .connector
            .get_quote_range(symbol, "1d", range.as_str())
            .await
        {
            Ok(response) => response,
            // Unknown symbols and untraded windows both come back as "no
            // quotes"; callers decide what an empty series means.
            Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => return Ok(vec![]),
            Err(e) => {
                return Err(MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: e.to_string(),
                })
            }
        };

        Self::collect_candles(symbol, response)
    }

    async fn get_history_window(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketDataError> {
        debug!(
            "Fetching history for {} from {} to {} from Yahoo",
            symbol,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let start_time = Self::chrono_to_offset_datetime(start);
        let end_time = Self::chrono_to_offset_datetime(end);

        let response = match self
            .connector
            .get_quote_history(symbol, start_time, end_time)
            .await
        {
            Ok(response) => response,
            Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => return Ok(vec![]),
            Err(e) => {
                return Err(MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: e.to_string(),
                })
            }
        };

        Self::collect_candles(symbol, response)
    }
}
