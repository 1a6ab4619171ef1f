use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::TradeError;
use crate::holdings::HoldingRepositoryTrait;
use crate::portfolios::PortfolioRepositoryTrait;
use crate::quotes::QuoteServiceTrait;
use crate::trades::trades_model::{HoldingChange, NewTrade, Trade, TradeApplication, TradeSide};
use crate::trades::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
use crate::Result;

/// Service for executing paper trades at live market prices.
pub struct TradeService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl TradeService {
    pub fn new(
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            portfolio_repository,
            holding_repository,
            trade_repository,
            quote_service,
        }
    }
}

#[async_trait]
impl TradeServiceTrait for TradeService {
    async fn execute_trade(&self, user_id: &str, new_trade: NewTrade) -> Result<Trade> {
        let validated = new_trade.validate()?;
        let portfolio = self.portfolio_repository.get_by_user(user_id)?;

        // Orders fill at the latest daily close; there is no fallback
        // pricing here, an unquotable symbol cannot be traded.
        let price = self.quote_service.get_latest_price(&validated.symbol).await?;
        let trade_value = price * validated.shares;

        let held = self
            .holding_repository
            .get_by_symbol(&portfolio.id, &validated.symbol)?
            .map(|holding| holding.shares)
            .unwrap_or(Decimal::ZERO);

        let (new_cash_balance, holding_change) = match validated.side {
            TradeSide::Buy => {
                if trade_value > portfolio.cash_balance {
                    return Err(TradeError::InsufficientFunds {
                        required: trade_value,
                        available: portfolio.cash_balance,
                    }
                    .into());
                }
                (
                    portfolio.cash_balance - trade_value,
                    HoldingChange::Upsert {
                        new_shares: held + validated.shares,
                    },
                )
            }
            TradeSide::Sell => {
                if validated.shares > held {
                    return Err(TradeError::InsufficientShares {
                        symbol: validated.symbol,
                        requested: validated.shares,
                        held,
                    }
                    .into());
                }
                let remaining = held - validated.shares;
                let change = if remaining.is_zero() {
                    HoldingChange::Delete
                } else {
                    HoldingChange::Upsert {
                        new_shares: remaining,
                    }
                };
                (portfolio.cash_balance + trade_value, change)
            }
        };

        debug!(
            "Executing {} {} {} at {} for user {}",
            validated.side, validated.shares, validated.symbol, price, user_id
        );

        self.trade_repository
            .apply_trade(TradeApplication {
                portfolio_id: portfolio.id,
                new_cash_balance,
                holding_change,
                symbol: validated.symbol,
                shares: validated.shares,
                price,
                side: validated.side,
            })
            .await
    }
}
