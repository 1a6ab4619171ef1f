#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use paperfolio_market_data::{Candle, HistoryRange, MarketDataError};

    use crate::holdings::{
        Holding, HoldingRepositoryTrait, HoldingsValuationService, HoldingsValuationServiceTrait,
    };
    use crate::quotes::QuoteServiceTrait;
    use crate::trades::{Trade, TradeApplication, TradeRepositoryTrait, TradeSide};
    use crate::{Error, Result};

    struct MockHoldingRepository {
        holdings: Vec<Holding>,
    }

    impl HoldingRepositoryTrait for MockHoldingRepository {
        fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>> {
            Ok(self
                .holdings
                .iter()
                .filter(|h| h.portfolio_id == portfolio_id)
                .cloned()
                .collect())
        }

        fn get_by_symbol(&self, portfolio_id: &str, symbol: &str) -> Result<Option<Holding>> {
            Ok(self
                .holdings
                .iter()
                .find(|h| h.portfolio_id == portfolio_id && h.symbol == symbol)
                .cloned())
        }
    }

    struct MockTradeRepository {
        trades: Vec<Trade>,
    }

    #[async_trait]
    impl TradeRepositoryTrait for MockTradeRepository {
        fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Trade>> {
            Ok(self
                .trades
                .iter()
                .filter(|t| t.portfolio_id == portfolio_id)
                .cloned()
                .collect())
        }

        fn get_by_portfolio_and_symbol(
            &self,
            portfolio_id: &str,
            symbol: &str,
        ) -> Result<Vec<Trade>> {
            Ok(self
                .trades
                .iter()
                .filter(|t| t.portfolio_id == portfolio_id && t.symbol == symbol)
                .cloned()
                .collect())
        }

        async fn apply_trade(&self, _application: TradeApplication) -> Result<Trade> {
            panic!("not used by valuation tests");
        }
    }

    struct MockQuoteService {
        prices: HashMap<String, Decimal>,
    }

    #[async_trait]
    impl QuoteServiceTrait for MockQuoteService {
        async fn get_latest_price(&self, symbol: &str) -> Result<Decimal> {
            self.get_latest_price_with_fallback(symbol, HistoryRange::OneDay)
                .await
        }

        async fn get_latest_price_with_fallback(
            &self,
            symbol: &str,
            _range: HistoryRange,
        ) -> Result<Decimal> {
            self.prices.get(symbol).copied().ok_or_else(|| {
                Error::MarketData(MarketDataError::NoData {
                    symbol: symbol.to_string(),
                    range: "1d".to_string(),
                })
            })
        }

        async fn get_history(
            &self,
            _symbol: &str,
            _range: HistoryRange,
        ) -> Result<Vec<Candle>> {
            Ok(vec![])
        }
    }

    fn holding(symbol: &str, shares: Decimal) -> Holding {
        Holding {
            id: format!("h-{}", symbol),
            portfolio_id: "p-1".to_string(),
            symbol: symbol.to_string(),
            shares,
        }
    }

    fn trade(symbol: &str, side: TradeSide, shares: Decimal, price: Decimal) -> Trade {
        Trade {
            id: "t-1".to_string(),
            portfolio_id: "p-1".to_string(),
            symbol: symbol.to_string(),
            shares,
            price,
            side,
            executed_at: Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap(),
        }
    }

    fn service(
        holdings: Vec<Holding>,
        trades: Vec<Trade>,
        prices: HashMap<String, Decimal>,
    ) -> HoldingsValuationService {
        HoldingsValuationService::new(
            Arc::new(MockHoldingRepository { holdings }),
            Arc::new(MockTradeRepository { trades }),
            Arc::new(MockQuoteService { prices }),
        )
    }

    #[tokio::test]
    async fn test_view_combines_price_and_cost_basis() {
        let prices = HashMap::from([("AAPL".to_string(), dec!(130))]);
        let service = service(
            vec![holding("AAPL", dec!(20))],
            vec![
                trade("AAPL", TradeSide::Buy, dec!(10), dec!(100)),
                trade("AAPL", TradeSide::Buy, dec!(10), dec!(120)),
            ],
            prices,
        );

        let views = service
            .build_holding_views("p-1", HistoryRange::OneMonth)
            .await
            .unwrap();
        assert_eq!(views.len(), 1);

        let view = &views[0];
        assert_eq!(view.current_price, dec!(130));
        assert_eq!(view.market_value, dec!(2600));
        assert_eq!(view.average_cost, dec!(110));
        assert_eq!(view.profit_loss, dec!(400));
        assert_eq!(view.profit_loss_per_share, dec!(20));
        assert_eq!(view.percent_gain.round_dp(2), dec!(18.18));
        assert_eq!(view.weight_pct, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_missing_price_for_owned_position_is_error() {
        let service = service(vec![holding("GHOST", dec!(5))], vec![], HashMap::new());

        let result = service
            .build_holding_views("p-1", HistoryRange::OneMonth)
            .await;
        assert!(matches!(
            result,
            Err(Error::MarketData(MarketDataError::NoData { .. }))
        ));
    }

    #[tokio::test]
    async fn test_position_without_trades_has_zero_basis() {
        let prices = HashMap::from([("MSFT".to_string(), dec!(50))]);
        let service = service(vec![holding("MSFT", dec!(4))], vec![], prices);

        let views = service
            .build_holding_views("p-1", HistoryRange::OneMonth)
            .await
            .unwrap();
        let view = &views[0];
        assert_eq!(view.average_cost, Decimal::ZERO);
        assert_eq!(view.profit_loss, dec!(200));
        assert_eq!(view.percent_gain, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_empty_portfolio_yields_no_views() {
        let service = service(vec![], vec![], HashMap::new());

        let views = service
            .build_holding_views("p-1", HistoryRange::OneMonth)
            .await
            .unwrap();
        assert!(views.is_empty());
    }
}
