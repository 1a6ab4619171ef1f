//! Performance module - daily snapshots and portfolio history metrics.

mod performance_calculator;
mod performance_model;
mod performance_service;
mod performance_traits;

// Re-export the public interface
pub use performance_calculator::{drawdown_series, max_drawdown, return_since, trailing_sma};
pub use performance_model::{NewSnapshot, PerformanceSeries, PortfolioSnapshot};
pub use performance_service::PerformanceService;
pub use performance_traits::{PerformanceServiceTrait, SnapshotRepositoryTrait};

#[cfg(test)]
mod performance_calculator_tests;
