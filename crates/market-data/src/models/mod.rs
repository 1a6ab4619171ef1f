//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `candle` - Daily OHLCV data (Candle)
//! - `range` - Named history windows (HistoryRange)

mod candle;
mod range;

pub use candle::Candle;
pub use range::HistoryRange;
