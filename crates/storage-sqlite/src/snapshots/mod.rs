mod model;
mod repository;

pub use model::PortfolioSnapshotDB;
pub use repository::SnapshotRepository;

// Re-export core types for convenience
pub use paperfolio_core::performance::SnapshotRepositoryTrait;
