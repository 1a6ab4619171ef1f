use async_trait::async_trait;
use chrono::NaiveDate;

use crate::dashboard::dashboard_model::{DashboardContext, DashboardQuery};
use crate::Result;

/// Trait defining the contract for dashboard assembly.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Assembles the dashboard for today.
    async fn get_dashboard(&self, user_id: &str, query: DashboardQuery)
        -> Result<DashboardContext>;

    /// Assembles the dashboard as of a given day. Viewing the dashboard
    /// records that day's value snapshot as a side effect.
    async fn get_dashboard_as_of(
        &self,
        user_id: &str,
        query: DashboardQuery,
        today: NaiveDate,
    ) -> Result<DashboardContext>;
}
