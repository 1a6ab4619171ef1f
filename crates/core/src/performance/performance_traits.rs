use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::performance::performance_model::{NewSnapshot, PerformanceSeries, PortfolioSnapshot};
use crate::Result;

/// Trait defining the contract for snapshot repositories.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Records a snapshot unless one already exists for that user and day.
    /// Losing the race to another writer is not an error.
    async fn save_if_absent(&self, snapshot: NewSnapshot) -> Result<()>;

    /// Returns a user's snapshots ordered by date, oldest first.
    fn get_by_user(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;
}

/// Trait defining the contract for performance tracking.
#[async_trait]
pub trait PerformanceServiceTrait: Send + Sync {
    /// Records today's total value, then builds the full metric series
    /// from everything recorded so far. The write happens first so the
    /// returned series always includes today.
    async fn record_and_build(
        &self,
        user_id: &str,
        total_value: Decimal,
        today: NaiveDate,
    ) -> Result<PerformanceSeries>;
}
