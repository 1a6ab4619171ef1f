//! SQLite storage implementation for portfolios.

mod model;
mod repository;

pub use model::PortfolioDB;
pub use repository::PortfolioRepository;

// Re-export trait from core for convenience
pub use paperfolio_core::portfolios::PortfolioRepositoryTrait;
