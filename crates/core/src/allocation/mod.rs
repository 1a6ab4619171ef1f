//! Allocation module - portfolio weight breakdown.

mod allocation_calculator;
mod allocation_model;

// Re-export the public interface
pub use allocation_calculator::{build_allocation, weight_pct};
pub use allocation_model::AllocationSlice;

#[cfg(test)]
mod allocation_calculator_tests;
