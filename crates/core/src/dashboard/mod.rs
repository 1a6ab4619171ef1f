//! Dashboard module - the full portfolio view assembled in one place.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

// Re-export the public interface
pub use dashboard_model::{DashboardContext, DashboardQuery};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
