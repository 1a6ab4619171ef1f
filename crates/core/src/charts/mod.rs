//! Charts module - candle series prepared for symbol lookup charts.

mod chart_calculator;
mod charts_model;

// Re-export the public interface
pub use chart_calculator::build_symbol_chart;
pub use charts_model::SymbolChart;
