use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use paperfolio_core::errors::Result;
use paperfolio_core::holdings::{Holding, HoldingRepositoryTrait};

use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::holdings::dsl::*;

use super::model::HoldingDB;

/// Repository for reading holding data from the database.
///
/// Holdings are only ever written as part of an applied trade, inside the
/// trade repository's transaction, so this repository needs no writer.
pub struct HoldingRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl HoldingRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl HoldingRepositoryTrait for HoldingRepository {
    fn get_by_portfolio(&self, portfolio_id_param: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let results = holdings
            .filter(portfolio_id.eq(portfolio_id_param))
            .select(HoldingDB::as_select())
            .order(symbol.asc())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Holding::from).collect())
    }

    fn get_by_symbol(&self, portfolio_id_param: &str, symbol_param: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let result = holdings
            .filter(portfolio_id.eq(portfolio_id_param))
            .filter(symbol.eq(symbol_param))
            .select(HoldingDB::as_select())
            .first::<HoldingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(Holding::from))
    }
}
