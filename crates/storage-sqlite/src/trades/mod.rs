mod model;
mod repository;

pub use model::TradeDB;
pub use repository::TradeRepository;

// Re-export core types for convenience
pub use paperfolio_core::trades::TradeRepositoryTrait;
