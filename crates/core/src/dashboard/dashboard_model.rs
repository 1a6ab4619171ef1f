//! Dashboard request and response models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperfolio_market_data::HistoryRange;

use crate::allocation::AllocationSlice;
use crate::charts::SymbolChart;
use crate::errors::ValidationError;
use crate::holdings::HoldingView;
use crate::performance::PerformanceSeries;
use crate::trades::TradeHistoryRow;
use crate::{Error, Result};

/// Parsed dashboard request parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardQuery {
    /// Symbol to look up alongside the portfolio, already uppercased.
    pub symbol: Option<String>,
    pub range: HistoryRange,
}

impl DashboardQuery {
    /// Parses raw query parameters. A blank symbol means no lookup; a
    /// missing range falls back to the default; an unknown range is
    /// rejected.
    pub fn from_params(symbol: Option<String>, range: Option<String>) -> Result<Self> {
        let symbol = symbol
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty());

        let range = match range {
            Some(raw) => raw
                .parse::<HistoryRange>()
                .map_err(|err| Error::Validation(ValidationError::InvalidInput(err.to_string())))?,
            None => HistoryRange::default(),
        };

        Ok(Self { symbol, range })
    }
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            symbol: None,
            range: HistoryRange::default(),
        }
    }
}

/// Everything the dashboard shows, in one serializable bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardContext {
    pub cash_balance: Decimal,
    pub holdings: Vec<HoldingView>,
    pub holdings_value: Decimal,
    pub total_portfolio_value: Decimal,
    pub performance: PerformanceSeries,
    pub allocation: Vec<AllocationSlice>,
    pub trade_history: Vec<TradeHistoryRow>,
    /// Chart for the looked-up symbol; None when nothing was looked up
    /// or the provider had no data for it.
    pub symbol_chart: Option<SymbolChart>,
    pub symbol: Option<String>,
    pub range: String,
}
