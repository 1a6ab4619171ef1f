use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A looked-up symbol's candle history with chart overlays, aligned by
/// index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolChart {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<Decimal>,
    pub volumes: Vec<u64>,
    pub sma_20: Vec<Option<Decimal>>,
    pub sma_50: Vec<Option<Decimal>>,
    pub sma_150: Vec<Option<Decimal>>,
    pub sma_200: Vec<Option<Decimal>>,
    pub volume_ma_30: Vec<Option<Decimal>>,
    pub latest_price: Decimal,
    pub latest_timestamp: DateTime<Utc>,
    /// Move since the previous close; None when the series has a single
    /// point.
    pub change: Option<Decimal>,
}
