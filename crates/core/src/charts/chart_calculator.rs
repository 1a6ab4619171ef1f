//! Chart series assembly for symbol lookups.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use paperfolio_market_data::Candle;

use crate::charts::charts_model::SymbolChart;
use crate::constants::{CLOSE_SMA_WINDOWS, VOLUME_MA_WINDOW};
use crate::performance::trailing_sma;

/// Builds the lookup chart for a symbol from its candle history.
///
/// Returns None for an empty history; a symbol the provider knows
/// nothing about simply has no chart.
pub fn build_symbol_chart(symbol: &str, candles: &[Candle]) -> Option<SymbolChart> {
    let last = candles.last()?;

    let dates: Vec<NaiveDate> = candles.iter().map(|c| c.timestamp.date_naive()).collect();
    let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
    let volumes: Vec<u64> = candles
        .iter()
        .map(|c| {
            c.volume
                .and_then(|volume| volume.to_u64())
                .unwrap_or(0)
        })
        .collect();

    let [sma_20, sma_50, sma_150, sma_200] =
        CLOSE_SMA_WINDOWS.map(|window| trailing_sma(&closes, window));

    let volume_values: Vec<Decimal> = volumes.iter().map(|v| Decimal::from(*v)).collect();
    let volume_ma_30 = trailing_sma(&volume_values, VOLUME_MA_WINDOW);

    let change = if closes.len() >= 2 {
        Some(closes[closes.len() - 1] - closes[closes.len() - 2])
    } else {
        None
    };

    Some(SymbolChart {
        symbol: symbol.to_string(),
        dates,
        closes,
        volumes,
        sma_20,
        sma_50,
        sma_150,
        sma_200,
        volume_ma_30,
        latest_price: last.close,
        latest_timestamp: last.timestamp,
        change,
    })
}
