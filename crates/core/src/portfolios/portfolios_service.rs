use log::debug;
use std::sync::Arc;

use super::portfolios_model::{NewPortfolio, Portfolio};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::constants::DEFAULT_CASH_BALANCE;
use crate::errors::Result;

/// Service for provisioning and loading portfolios.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_for_user(&self, user_id: &str) -> Result<Portfolio> {
        debug!("Provisioning portfolio for user {}", user_id);

        let new_portfolio = NewPortfolio {
            user_id: user_id.to_string(),
            cash_balance: DEFAULT_CASH_BALANCE,
        };
        new_portfolio.validate()?;

        self.repository.create(new_portfolio).await
    }

    fn get_by_user(&self, user_id: &str) -> Result<Portfolio> {
        self.repository.get_by_user(user_id)
    }
}
