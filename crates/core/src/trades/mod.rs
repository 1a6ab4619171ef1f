//! Trades module - submission, execution and realized history.

mod trade_history_calculator;
mod trades_model;
mod trades_service;
mod trades_traits;

// Re-export the public interface
pub use trade_history_calculator::{build_trade_history, TradeHistoryRow};
pub use trades_model::{HoldingChange, NewTrade, Trade, TradeApplication, TradeSide, ValidatedTrade};
pub use trades_service::TradeService;
pub use trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
