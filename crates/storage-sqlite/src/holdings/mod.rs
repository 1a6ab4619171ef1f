//! SQLite storage implementation for holdings.

mod model;
mod repository;

pub use model::HoldingDB;
pub use repository::HoldingRepository;

// Re-export trait from core for convenience
pub use paperfolio_core::holdings::HoldingRepositoryTrait;
