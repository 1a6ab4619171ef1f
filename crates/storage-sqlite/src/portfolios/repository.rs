use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use paperfolio_core::errors::Result;
use paperfolio_core::portfolios::{NewPortfolio, Portfolio, PortfolioRepositoryTrait};

use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::portfolios;
use crate::schema::portfolios::dsl::*;

use super::model::PortfolioDB;

/// Repository for managing portfolio data in the database
pub struct PortfolioRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PortfolioRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn create(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;

        let mut portfolio_db: PortfolioDB = new_portfolio.into();
        portfolio_db.id = uuid::Uuid::new_v4().to_string();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(portfolios::table)
                    .values(&portfolio_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(portfolio_db.into())
            })
            .await
    }

    fn get_by_user(&self, user_id_param: &str) -> Result<Portfolio> {
        let mut conn = get_connection(&self.pool)?;

        let portfolio = portfolios
            .filter(user_id.eq(user_id_param))
            .select(PortfolioDB::as_select())
            .first::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(portfolio.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use paperfolio_core::constants::DEFAULT_CASH_BALANCE;
    use paperfolio_core::errors::{DatabaseError, Error};
    use tempfile::tempdir;

    /// Creates a repository over a fresh on-disk database.
    /// The TempDir is returned so the database file outlives the test body.
    async fn create_test_repository() -> (PortfolioRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (PortfolioRepository::new(Arc::clone(&pool), writer), temp_dir)
    }

    #[tokio::test]
    async fn test_create_and_get_by_user_round_trip() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .create(NewPortfolio {
                user_id: "user-1".to_string(),
                cash_balance: DEFAULT_CASH_BALANCE,
            })
            .await
            .expect("Failed to create portfolio");

        assert!(!created.id.is_empty());
        assert_eq!(created.cash_balance, DEFAULT_CASH_BALANCE);

        let fetched = repo.get_by_user("user-1").expect("Failed to fetch portfolio");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.user_id, "user-1");
        assert_eq!(fetched.cash_balance, DEFAULT_CASH_BALANCE);
    }

    #[tokio::test]
    async fn test_second_portfolio_for_same_user_is_rejected() {
        let (repo, _temp_dir) = create_test_repository().await;

        let new_portfolio = NewPortfolio {
            user_id: "user-1".to_string(),
            cash_balance: DEFAULT_CASH_BALANCE,
        };

        repo.create(new_portfolio.clone())
            .await
            .expect("Failed to create first portfolio");

        let result = repo.create(new_portfolio).await;
        let err = result.expect_err("Duplicate portfolio should be rejected");
        assert!(
            err.to_string().contains("Unique constraint violation"),
            "unexpected error: {}",
            err
        );
    }

    #[tokio::test]
    async fn test_blank_user_id_is_rejected_before_any_write() {
        let (repo, _temp_dir) = create_test_repository().await;

        let result = repo
            .create(NewPortfolio {
                user_id: "   ".to_string(),
                cash_balance: DEFAULT_CASH_BALANCE,
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_by_user_for_unknown_user() {
        let (repo, _temp_dir) = create_test_repository().await;

        let result = repo.get_by_user("nobody");
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }
}
