use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One position's share of total portfolio value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub symbol: String,
    pub market_value: Decimal,
    pub weight_pct: Decimal,
}
