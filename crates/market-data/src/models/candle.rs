use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bar of market data, daily or intraday.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candle {
    /// When the bar was recorded
    pub timestamp: DateTime<Utc>,

    /// Open, absent for some intraday bars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    /// Session high, absent for some intraday bars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,

    /// Session low, absent for some intraday bars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,

    /// Close or latest price; always present
    pub close: Decimal,

    /// Shares traded, when the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl Candle {
    /// A candle carrying only the required fields.
    pub fn new(timestamp: DateTime<Utc>, close: Decimal) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// A full OHLCV candle.
    pub fn ohlcv(
        timestamp: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            timestamp,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close,
            volume: Some(volume),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_candle_new() {
        let candle = Candle::new(Utc::now(), dec!(150.25));
        assert_eq!(candle.close, dec!(150.25));
        assert!(candle.open.is_none());
        assert!(candle.volume.is_none());
    }

    #[test]
    fn test_candle_ohlcv() {
        let candle = Candle::ohlcv(
            Utc::now(),
            dec!(148.00),
            dec!(152.00),
            dec!(147.50),
            dec!(150.25),
            dec!(1000000),
        );
        assert_eq!(candle.open, Some(dec!(148.00)));
        assert_eq!(candle.high, Some(dec!(152.00)));
        assert_eq!(candle.low, Some(dec!(147.50)));
        assert_eq!(candle.close, dec!(150.25));
        assert_eq!(candle.volume, Some(dec!(1000000)));
    }
}
