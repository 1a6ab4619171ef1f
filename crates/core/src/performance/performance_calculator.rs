//! Pure series math over the portfolio value history.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::performance::performance_model::PortfolioSnapshot;

/// Trailing simple moving average over the `window` values before each
/// point, excluding the point itself.
///
/// The first `window` positions have no average; a value only enters the
/// calculation on the day after it was recorded.
pub fn trailing_sma(values: &[Decimal], window: usize) -> Vec<Option<Decimal>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i < window {
                None
            } else {
                let sum: Decimal = values[i - window..i].iter().sum();
                Some(sum / Decimal::from(window as u64))
            }
        })
        .collect()
}

/// Percent distance below the running peak at each point, as whole
/// percents, zero or negative. Points at or above every prior value are
/// zero, as is any point before the first nonzero peak.
pub fn drawdown_series(values: &[Decimal]) -> Vec<i32> {
    let mut peak = Decimal::ZERO;
    values
        .iter()
        .map(|value| {
            if *value > peak {
                peak = *value;
            }
            if peak.is_zero() {
                0
            } else {
                ((*value - peak) / peak * dec!(100))
                    .round()
                    .to_i32()
                    .unwrap_or(0)
            }
        })
        .collect()
}

/// The deepest point of a drawdown series, or zero for an empty one.
pub fn max_drawdown(drawdowns: &[i32]) -> i32 {
    drawdowns.iter().copied().min().unwrap_or(0)
}

/// Whole-percent return from the first snapshot on or after `anchor` to
/// the latest snapshot. Zero when no snapshot qualifies or the anchor
/// value is zero.
///
/// Snapshots must be ordered by date, oldest first.
pub fn return_since(snapshots: &[PortfolioSnapshot], anchor: NaiveDate) -> i32 {
    let base = match snapshots.iter().find(|s| s.snapshot_date >= anchor) {
        Some(snapshot) => snapshot.total_value,
        None => return 0,
    };
    let latest = match snapshots.last() {
        Some(snapshot) => snapshot.total_value,
        None => return 0,
    };
    if base.is_zero() {
        return 0;
    }
    ((latest - base) / base * dec!(100)).round().to_i32().unwrap_or(0)
}
