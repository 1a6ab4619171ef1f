use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::constants::{PORTFOLIO_SMA_LONG, PORTFOLIO_SMA_SHORT};
use crate::performance::performance_calculator::{
    drawdown_series, max_drawdown, return_since, trailing_sma,
};
use crate::performance::performance_model::{NewSnapshot, PerformanceSeries};
use crate::performance::performance_traits::{PerformanceServiceTrait, SnapshotRepositoryTrait};
use crate::{Error, Result};

/// Service that maintains the daily value history and derives portfolio
/// performance metrics from it.
pub struct PerformanceService {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl PerformanceService {
    pub fn new(snapshot_repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        Self { snapshot_repository }
    }
}

#[async_trait]
impl PerformanceServiceTrait for PerformanceService {
    async fn record_and_build(
        &self,
        user_id: &str,
        total_value: Decimal,
        today: NaiveDate,
    ) -> Result<PerformanceSeries> {
        self.snapshot_repository
            .save_if_absent(NewSnapshot {
                user_id: user_id.to_string(),
                snapshot_date: today,
                total_value,
            })
            .await?;

        let snapshots = self.snapshot_repository.get_by_user(user_id)?;
        debug!(
            "Building performance series from {} snapshots for user {}",
            snapshots.len(),
            user_id
        );

        let dates: Vec<NaiveDate> = snapshots.iter().map(|s| s.snapshot_date).collect();
        let values: Vec<Decimal> = snapshots.iter().map(|s| s.total_value).collect();

        let sma_7 = trailing_sma(&values, PORTFOLIO_SMA_SHORT);
        let sma_30 = trailing_sma(&values, PORTFOLIO_SMA_LONG);
        let drawdown_pct = drawdown_series(&values);
        let max_drawdown_pct = max_drawdown(&drawdown_pct);

        let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1)
            .ok_or_else(|| Error::Unexpected("Invalid year start date".to_string()))?;
        let ytd_return_pct = return_since(&snapshots, year_start);
        let one_year_return_pct = return_since(&snapshots, today - Duration::days(365));

        Ok(PerformanceSeries {
            dates,
            values,
            sma_7,
            sma_30,
            drawdown_pct,
            max_drawdown_pct,
            ytd_return_pct,
            one_year_return_pct,
        })
    }
}
