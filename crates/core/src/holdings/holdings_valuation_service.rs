use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paperfolio_market_data::HistoryRange;

use crate::holdings::cost_basis_calculator::cost_basis;
use crate::holdings::holdings_model::HoldingView;
use crate::holdings::holdings_traits::{HoldingRepositoryTrait, HoldingsValuationServiceTrait};
use crate::quotes::QuoteServiceTrait;
use crate::trades::TradeRepositoryTrait;
use crate::Result;

/// Service that turns raw positions into priced holding views.
pub struct HoldingsValuationService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl HoldingsValuationService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            holding_repository,
            trade_repository,
            quote_service,
        }
    }
}

#[async_trait]
impl HoldingsValuationServiceTrait for HoldingsValuationService {
    async fn build_holding_views(
        &self,
        portfolio_id: &str,
        range: HistoryRange,
    ) -> Result<Vec<HoldingView>> {
        let holdings = self.holding_repository.get_by_portfolio(portfolio_id)?;
        debug!(
            "Valuing {} holdings for portfolio {}",
            holdings.len(),
            portfolio_id
        );

        let mut views = Vec::with_capacity(holdings.len());
        for holding in holdings {
            // A price we cannot fetch for an owned position poisons every
            // downstream total, so it is an error rather than a skip.
            let current_price = self
                .quote_service
                .get_latest_price_with_fallback(&holding.symbol, range)
                .await?;
            let market_value = current_price * holding.shares;

            let trades = self
                .trade_repository
                .get_by_portfolio_and_symbol(portfolio_id, &holding.symbol)?;
            let basis = cost_basis(&trades);

            let profit_loss = market_value - basis.average_cost * holding.shares;
            let profit_loss_per_share = current_price - basis.average_cost;
            let percent_gain = if basis.average_cost > Decimal::ZERO {
                profit_loss_per_share / basis.average_cost * dec!(100)
            } else {
                Decimal::ZERO
            };

            views.push(HoldingView {
                symbol: holding.symbol,
                shares: holding.shares,
                current_price,
                market_value,
                average_cost: basis.average_cost,
                profit_loss,
                profit_loss_per_share,
                percent_gain,
                weight_pct: Decimal::ZERO,
            });
        }

        Ok(views)
    }
}
