//! Paperfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for paperfolio, a paper
//! trading portfolio tracker. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate; market data comes
//! in through the provider trait of the `market-data` crate.

pub mod allocation;
pub mod charts;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod holdings;
pub mod performance;
pub mod portfolios;
pub mod quotes;
pub mod trades;

// Re-export common types
pub use dashboard::{DashboardContext, DashboardQuery};
pub use holdings::{Holding, HoldingView};
pub use portfolios::{NewPortfolio, Portfolio};
pub use trades::{NewTrade, Trade, TradeSide};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
