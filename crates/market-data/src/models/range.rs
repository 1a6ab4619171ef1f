use std::fmt;
use std::str::FromStr;

use crate::errors::MarketDataError;

/// Named history window accepted by providers.
///
/// The string forms match the range selector exposed to users, so a
/// query parameter parses directly into a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryRange {
    OneDay,
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    YearToDate,
    Max,
}

impl HistoryRange {
    /// The provider-facing string form ("1d", "1mo", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRange::OneDay => "1d",
            HistoryRange::FiveDays => "5d",
            HistoryRange::OneMonth => "1mo",
            HistoryRange::ThreeMonths => "3mo",
            HistoryRange::SixMonths => "6mo",
            HistoryRange::OneYear => "1y",
            HistoryRange::TwoYears => "2y",
            HistoryRange::FiveYears => "5y",
            HistoryRange::YearToDate => "ytd",
            HistoryRange::Max => "max",
        }
    }
}

impl Default for HistoryRange {
    fn default() -> Self {
        HistoryRange::OneMonth
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryRange {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(HistoryRange::OneDay),
            "5d" => Ok(HistoryRange::FiveDays),
            "1mo" => Ok(HistoryRange::OneMonth),
            "3mo" => Ok(HistoryRange::ThreeMonths),
            "6mo" => Ok(HistoryRange::SixMonths),
            "1y" => Ok(HistoryRange::OneYear),
            "2y" => Ok(HistoryRange::TwoYears),
            "5y" => Ok(HistoryRange::FiveYears),
            "ytd" => Ok(HistoryRange::YearToDate),
            "max" => Ok(HistoryRange::Max),
            other => Err(MarketDataError::ValidationFailed {
                message: format!("Unknown history range: {}", other),
            }),
        }
    }
}
