use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::allocation::build_allocation;
use crate::charts::build_symbol_chart;
use crate::dashboard::dashboard_model::{DashboardContext, DashboardQuery};
use crate::dashboard::dashboard_traits::DashboardServiceTrait;
use crate::holdings::HoldingsValuationServiceTrait;
use crate::performance::PerformanceServiceTrait;
use crate::portfolios::PortfolioRepositoryTrait;
use crate::quotes::QuoteServiceTrait;
use crate::trades::{build_trade_history, TradeRepositoryTrait};
use crate::Result;

/// Service that assembles the complete dashboard for one user.
pub struct DashboardService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    valuation_service: Arc<dyn HoldingsValuationServiceTrait>,
    performance_service: Arc<dyn PerformanceServiceTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl DashboardService {
    pub fn new(
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        valuation_service: Arc<dyn HoldingsValuationServiceTrait>,
        performance_service: Arc<dyn PerformanceServiceTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            portfolio_repository,
            valuation_service,
            performance_service,
            trade_repository,
            quote_service,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(
        &self,
        user_id: &str,
        query: DashboardQuery,
    ) -> Result<DashboardContext> {
        self.get_dashboard_as_of(user_id, query, Local::now().date_naive())
            .await
    }

    async fn get_dashboard_as_of(
        &self,
        user_id: &str,
        query: DashboardQuery,
        today: NaiveDate,
    ) -> Result<DashboardContext> {
        debug!("Assembling dashboard for user {} over {}", user_id, query.range);

        let portfolio = self.portfolio_repository.get_by_user(user_id)?;

        let mut holdings = self
            .valuation_service
            .build_holding_views(&portfolio.id, query.range)
            .await?;
        let holdings_value: Decimal = holdings.iter().map(|view| view.market_value).sum();
        let total_portfolio_value = portfolio.cash_balance + holdings_value;

        let performance = self
            .performance_service
            .record_and_build(user_id, total_portfolio_value, today)
            .await?;

        let allocation = build_allocation(&holdings, total_portfolio_value);
        for (view, slice) in holdings.iter_mut().zip(allocation.iter()) {
            view.weight_pct = slice.weight_pct;
        }

        let trades = self.trade_repository.get_by_portfolio(&portfolio.id)?;
        let trade_history = build_trade_history(&trades);

        let symbol_chart = match &query.symbol {
            Some(symbol) => {
                let candles = self.quote_service.get_history(symbol, query.range).await?;
                build_symbol_chart(symbol, &candles)
            }
            None => None,
        };

        Ok(DashboardContext {
            cash_balance: portfolio.cash_balance,
            holdings,
            holdings_value,
            total_portfolio_value,
            performance,
            allocation,
            trade_history,
            symbol_chart,
            symbol: query.symbol,
            range: query.range.to_string(),
        })
    }
}
