//! Paperfolio Market Data Crate
//!
//! Provider-agnostic daily price history fetching for the paperfolio
//! application.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Named history ranges (1d, 1mo, 1y, ...) matching the dashboard's
//!   range selector
//! - Explicit date-window requests for callers that need a precise span
//! - Daily OHLCV candles with `rust_decimal` prices
//!
//! # Core Types
//!
//! - [`Candle`] - One day of OHLCV market data
//! - [`HistoryRange`] - Named history window accepted by providers
//! - [`MarketDataProvider`] - Trait implemented by data sources
//! - [`YahooProvider`] - Yahoo Finance implementation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Candle, HistoryRange};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
