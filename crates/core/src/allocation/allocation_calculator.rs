//! Portfolio weight math.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::allocation_model::AllocationSlice;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::holdings::HoldingView;

/// A market value's share of the total, in percent rounded to two
/// decimals. Zero when the total is not positive.
pub fn weight_pct(market_value: Decimal, total_value: Decimal) -> Decimal {
    if total_value > Decimal::ZERO {
        (market_value / total_value * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// Builds the allocation breakdown for a set of priced holdings.
///
/// The total is the full portfolio value including cash, so the slices
/// sum to less than 100 percent whenever cash is held; cash itself gets
/// no slice.
pub fn build_allocation(holdings: &[HoldingView], total_value: Decimal) -> Vec<AllocationSlice> {
    holdings
        .iter()
        .map(|view| AllocationSlice {
            symbol: view.symbol.clone(),
            market_value: view.market_value,
            weight_pct: weight_pct(view.market_value, total_value),
        })
        .collect()
}
