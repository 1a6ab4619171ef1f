use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use paperfolio_core::constants::DECIMAL_PRECISION;
use paperfolio_core::errors::Result;
use paperfolio_core::trades::{HoldingChange, Trade, TradeApplication, TradeRepositoryTrait};

use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::holdings::HoldingDB;
use crate::schema::{holdings, portfolios, trades};
use crate::utils::format_datetime;

use super::model::TradeDB;

/// Repository for managing trade data in the database
pub struct TradeRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TradeRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    fn get_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        let trades_db = trades::table
            .filter(trades::portfolio_id.eq(portfolio_id))
            .select(TradeDB::as_select())
            .order(trades::executed_at.asc())
            .load::<TradeDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(trades_db.into_iter().map(Trade::from).collect())
    }

    fn get_by_portfolio_and_symbol(&self, portfolio_id: &str, symbol: &str) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        let trades_db = trades::table
            .filter(trades::portfolio_id.eq(portfolio_id))
            .filter(trades::symbol.eq(symbol))
            .select(TradeDB::as_select())
            .order(trades::executed_at.asc())
            .load::<TradeDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(trades_db.into_iter().map(Trade::from).collect())
    }

    async fn apply_trade(&self, application: TradeApplication) -> Result<Trade> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Trade> {
                let TradeApplication {
                    portfolio_id,
                    new_cash_balance,
                    holding_change,
                    symbol,
                    shares,
                    price,
                    side,
                } = application;

                diesel::update(portfolios::table.filter(portfolios::id.eq(&portfolio_id)))
                    .set((
                        portfolios::cash_balance
                            .eq(new_cash_balance.round_dp(DECIMAL_PRECISION).to_string()),
                        portfolios::updated_at.eq(format_datetime(Utc::now())),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                match holding_change {
                    HoldingChange::Upsert { new_shares } => {
                        let shares_text = new_shares.round_dp(DECIMAL_PRECISION).to_string();
                        let updated = diesel::update(
                            holdings::table
                                .filter(holdings::portfolio_id.eq(&portfolio_id))
                                .filter(holdings::symbol.eq(&symbol)),
                        )
                        .set(holdings::shares.eq(&shares_text))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                        if updated == 0 {
                            let holding_db = HoldingDB {
                                id: Uuid::new_v4().to_string(),
                                portfolio_id: portfolio_id.clone(),
                                symbol: symbol.clone(),
                                shares: shares_text,
                            };
                            diesel::insert_into(holdings::table)
                                .values(&holding_db)
                                .execute(conn)
                                .map_err(StorageError::from)?;
                        }
                    }
                    HoldingChange::Delete => {
                        diesel::delete(
                            holdings::table
                                .filter(holdings::portfolio_id.eq(&portfolio_id))
                                .filter(holdings::symbol.eq(&symbol)),
                        )
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    }
                }

                let trade_db = TradeDB {
                    id: Uuid::new_v4().to_string(),
                    portfolio_id,
                    symbol,
                    shares: shares.round_dp(DECIMAL_PRECISION).to_string(),
                    price: price.round_dp(DECIMAL_PRECISION).to_string(),
                    side: side.as_str().to_string(),
                    executed_at: format_datetime(Utc::now()),
                };
                let inserted = diesel::insert_into(trades::table)
                    .values(&trade_db)
                    .get_result::<TradeDB>(conn)
                    .map_err(StorageError::from)?;

                Ok(Trade::from(inserted))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use crate::holdings::HoldingRepository;
    use crate::portfolios::PortfolioRepository;
    use paperfolio_core::holdings::HoldingRepositoryTrait;
    use paperfolio_core::portfolios::{NewPortfolio, Portfolio, PortfolioRepositoryTrait};
    use paperfolio_core::trades::TradeSide;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    struct TestDb {
        trades: TradeRepository,
        portfolios: PortfolioRepository,
        holdings: HoldingRepository,
        _temp_dir: tempfile::TempDir,
    }

    /// Creates the repositories over a fresh on-disk database plus one
    /// portfolio to trade against.
    async fn setup() -> (TestDb, Portfolio) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let db = TestDb {
            trades: TradeRepository::new(Arc::clone(&pool), writer.clone()),
            portfolios: PortfolioRepository::new(Arc::clone(&pool), writer),
            holdings: HoldingRepository::new(Arc::clone(&pool)),
            _temp_dir: temp_dir,
        };

        let portfolio = db
            .portfolios
            .create(NewPortfolio {
                user_id: "user-1".to_string(),
                cash_balance: dec!(100000.00),
            })
            .await
            .expect("Failed to create portfolio");

        (db, portfolio)
    }

    fn application(
        portfolio_id: &str,
        symbol: &str,
        side: TradeSide,
        shares: Decimal,
        price: Decimal,
        new_cash_balance: Decimal,
        holding_change: HoldingChange,
    ) -> TradeApplication {
        TradeApplication {
            portfolio_id: portfolio_id.to_string(),
            new_cash_balance,
            holding_change,
            symbol: symbol.to_string(),
            shares,
            price,
            side,
        }
    }

    #[tokio::test]
    async fn test_buy_writes_cash_holding_and_trade_together() {
        let (db, portfolio) = setup().await;

        let trade = db
            .trades
            .apply_trade(application(
                &portfolio.id,
                "AAPL",
                TradeSide::Buy,
                dec!(10),
                dec!(150.25),
                dec!(98497.50),
                HoldingChange::Upsert {
                    new_shares: dec!(10),
                },
            ))
            .await
            .expect("Failed to apply trade");

        assert_eq!(trade.symbol, "AAPL");
        assert_eq!(trade.side, TradeSide::Buy);
        assert_eq!(trade.shares, dec!(10));
        assert_eq!(trade.price, dec!(150.25));
        assert!(!trade.id.is_empty());

        let refreshed = db
            .portfolios
            .get_by_user("user-1")
            .expect("Failed to fetch portfolio");
        assert_eq!(refreshed.cash_balance, dec!(98497.50));

        let holding = db
            .holdings
            .get_by_symbol(&portfolio.id, "AAPL")
            .expect("Failed to fetch holding")
            .expect("Holding should exist after a buy");
        assert_eq!(holding.shares, dec!(10));

        let trades = db
            .trades
            .get_by_portfolio(&portfolio.id)
            .expect("Failed to load trades");
        assert_eq!(trades.len(), 1);
    }

    #[tokio::test]
    async fn test_second_buy_updates_the_existing_holding_row() {
        let (db, portfolio) = setup().await;

        db.trades
            .apply_trade(application(
                &portfolio.id,
                "AAPL",
                TradeSide::Buy,
                dec!(10),
                dec!(100),
                dec!(99000),
                HoldingChange::Upsert {
                    new_shares: dec!(10),
                },
            ))
            .await
            .expect("Failed to apply first buy");

        db.trades
            .apply_trade(application(
                &portfolio.id,
                "AAPL",
                TradeSide::Buy,
                dec!(5),
                dec!(120),
                dec!(98400),
                HoldingChange::Upsert {
                    new_shares: dec!(15),
                },
            ))
            .await
            .expect("Failed to apply second buy");

        let holdings = db
            .holdings
            .get_by_portfolio(&portfolio.id)
            .expect("Failed to load holdings");
        assert_eq!(holdings.len(), 1, "the unique index allows one row per symbol");
        assert_eq!(holdings[0].shares, dec!(15));
    }

    #[tokio::test]
    async fn test_selling_out_deletes_the_holding() {
        let (db, portfolio) = setup().await;

        db.trades
            .apply_trade(application(
                &portfolio.id,
                "NVDA",
                TradeSide::Buy,
                dec!(8),
                dec!(500),
                dec!(96000),
                HoldingChange::Upsert {
                    new_shares: dec!(8),
                },
            ))
            .await
            .expect("Failed to apply buy");

        db.trades
            .apply_trade(application(
                &portfolio.id,
                "NVDA",
                TradeSide::Sell,
                dec!(8),
                dec!(550),
                dec!(100400),
                HoldingChange::Delete,
            ))
            .await
            .expect("Failed to apply sell");

        let holding = db
            .holdings
            .get_by_symbol(&portfolio.id, "NVDA")
            .expect("Failed to fetch holding");
        assert!(holding.is_none(), "a fully sold position leaves no row");

        let refreshed = db
            .portfolios
            .get_by_user("user-1")
            .expect("Failed to fetch portfolio");
        assert_eq!(refreshed.cash_balance, dec!(100400));

        // The trade log keeps both sides of the round trip.
        let trades = db
            .trades
            .get_by_portfolio(&portfolio.id)
            .expect("Failed to load trades");
        assert_eq!(trades.len(), 2);
    }

    #[tokio::test]
    async fn test_trades_come_back_oldest_first() {
        let (db, portfolio) = setup().await;

        for (symbol, shares, price, cash) in [
            ("AAPL", dec!(1), dec!(100), dec!(99900)),
            ("MSFT", dec!(1), dec!(200), dec!(99700)),
            ("AAPL", dec!(1), dec!(110), dec!(99590)),
        ] {
            db.trades
                .apply_trade(application(
                    &portfolio.id,
                    symbol,
                    TradeSide::Buy,
                    shares,
                    price,
                    cash,
                    HoldingChange::Upsert { new_shares: shares },
                ))
                .await
                .expect("Failed to apply trade");
        }

        let all = db
            .trades
            .get_by_portfolio(&portfolio.id)
            .expect("Failed to load trades");
        let symbols: Vec<&str> = all.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "AAPL"]);
        assert!(all[0].executed_at <= all[1].executed_at);
        assert!(all[1].executed_at <= all[2].executed_at);

        let aapl_only = db
            .trades
            .get_by_portfolio_and_symbol(&portfolio.id, "AAPL")
            .expect("Failed to load AAPL trades");
        assert_eq!(aapl_only.len(), 2);
        assert_eq!(aapl_only[0].price, dec!(100));
        assert_eq!(aapl_only[1].price, dec!(110));
    }
}
