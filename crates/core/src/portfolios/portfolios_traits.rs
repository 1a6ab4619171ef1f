//! Portfolio repository and service traits.
//!
//! These traits define the contract for portfolio operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::portfolios_model::{NewPortfolio, Portfolio};
use crate::errors::Result;

/// Trait defining the contract for Portfolio repository operations.
///
/// Implementations of this trait handle the persistence of portfolio data.
/// Cash balance changes are not exposed here; they only happen as part of
/// an applied trade (see `TradeRepositoryTrait::apply_trade`).
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Creates a new portfolio.
    ///
    /// Fails with a unique violation when the user already has one.
    async fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    /// Retrieves the portfolio owned by a user.
    fn get_by_user(&self, user_id: &str) -> Result<Portfolio>;
}

/// Trait defining the contract for Portfolio service operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Provisions the paper portfolio for a newly registered user, seeded
    /// with the default opening cash balance.
    ///
    /// The registration workflow is expected to call this exactly once per
    /// user; a second call fails with a unique violation.
    async fn create_for_user(&self, user_id: &str) -> Result<Portfolio>;

    /// Retrieves the portfolio owned by a user.
    fn get_by_user(&self, user_id: &str) -> Result<Portfolio>;
}
