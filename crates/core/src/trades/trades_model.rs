//! Trade domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SYMBOL_LENGTH;
use crate::{errors::ValidationError, Error, Result};

lazy_static! {
    /// Plausible ticker symbols: uppercase letters, digits, '.' and '-'
    static ref SYMBOL_REGEX: Regex =
        Regex::new(r"^[A-Z0-9.\-]{1,10}$").expect("Invalid regex pattern");
}

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown trade type: {}",
                other
            )))),
        }
    }
}

/// Domain model representing one executed trade.
///
/// Trades are append-only; they are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub shares: Decimal,
    pub price: Decimal,
    pub side: TradeSide,
    pub executed_at: DateTime<Utc>,
}

/// Raw trade submission, exactly as it arrives from the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub symbol: String,
    pub shares: String,
    pub trade_type: String,
}

/// A trade submission that passed input validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTrade {
    pub symbol: String,
    pub shares: Decimal,
    pub side: TradeSide,
}

/// The position change a trade produces.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingChange {
    /// Create the holding or set its share count.
    Upsert { new_shares: Decimal },
    /// Remove the holding; the position was closed in full.
    Delete,
}

/// Everything the storage layer needs to persist one trade atomically.
///
/// The service computes the new cash balance and position change up front
/// so the repository can apply cash update, holding change and trade row
/// in a single transaction without re-deriving business rules.
#[derive(Debug, Clone)]
pub struct TradeApplication {
    pub portfolio_id: String,
    pub new_cash_balance: Decimal,
    pub holding_change: HoldingChange,
    pub symbol: String,
    pub shares: Decimal,
    pub price: Decimal,
    pub side: TradeSide,
}

impl NewTrade {
    /// Validates the raw submission and produces typed values.
    ///
    /// Symbols are trimmed and uppercased before the plausibility check;
    /// shares must parse as a positive decimal; the trade type must be
    /// BUY or SELL. Validation happens before any price fetch or storage
    /// access, so a rejected submission performs no I/O.
    pub fn validate(&self) -> Result<ValidatedTrade> {
        let symbol = self.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if symbol.len() > MAX_SYMBOL_LENGTH || !SYMBOL_REGEX.is_match(&symbol) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid symbol: {}",
                self.symbol
            ))));
        }

        let shares = Decimal::from_str(self.shares.trim())?;
        if shares <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Shares must be a positive number".to_string(),
            )));
        }

        let side = self.trade_type.trim().parse::<TradeSide>()?;

        Ok(ValidatedTrade {
            symbol,
            shares,
            side,
        })
    }
}
