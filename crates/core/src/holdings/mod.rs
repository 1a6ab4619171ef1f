//! Holdings module - positions, cost basis and valuation.

mod cost_basis_calculator;
mod holdings_model;
mod holdings_traits;
mod holdings_valuation_service;

// Re-export the public interface
pub use cost_basis_calculator::{cost_basis, CostBasis};
pub use holdings_model::{Holding, HoldingView};
pub use holdings_traits::{HoldingRepositoryTrait, HoldingsValuationServiceTrait};
pub use holdings_valuation_service::HoldingsValuationService;

#[cfg(test)]
mod holdings_valuation_service_tests;
