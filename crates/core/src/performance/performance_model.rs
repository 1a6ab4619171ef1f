//! Performance domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total portfolio value captured on one calendar day.
///
/// At most one snapshot exists per user per day; the first value written
/// for a day wins and later writes are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub total_value: Decimal,
}

/// A snapshot about to be recorded.
#[derive(Debug, Clone)]
pub struct NewSnapshot {
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub total_value: Decimal,
}

/// The portfolio value series with its derived metrics, aligned by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Decimal>,
    /// Trailing 7 day average of prior values; None until enough history.
    pub sma_7: Vec<Option<Decimal>>,
    /// Trailing 30 day average of prior values; None until enough history.
    pub sma_30: Vec<Option<Decimal>>,
    /// Percent below the running peak, zero or negative, whole percents.
    pub drawdown_pct: Vec<i32>,
    pub max_drawdown_pct: i32,
    pub ytd_return_pct: i32,
    pub one_year_return_pct: i32,
}
