//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Concrete provider implementations (Yahoo)
//!
//! Providers return raw candle series; interpreting an empty series
//! (unknown symbol vs. untraded window) is left to the caller.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
