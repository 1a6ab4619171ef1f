use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use paperfolio_core::errors::Result;
use paperfolio_core::performance::{NewSnapshot, PortfolioSnapshot, SnapshotRepositoryTrait};

use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::portfolio_snapshots;

use super::model::PortfolioSnapshotDB;

/// Repository for managing portfolio snapshot data in the database
pub struct SnapshotRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    async fn save_if_absent(&self, snapshot: NewSnapshot) -> Result<()> {
        let mut snapshot_db: PortfolioSnapshotDB = snapshot.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                snapshot_db.id = Uuid::new_v4().to_string();
                // The unique (user_id, snapshot_date) index makes the first
                // write of the day win; later writes are dropped silently.
                diesel::insert_into(portfolio_snapshots::table)
                    .values(&snapshot_db)
                    .on_conflict((
                        portfolio_snapshots::user_id,
                        portfolio_snapshots::snapshot_date,
                    ))
                    .do_nothing()
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn get_by_user(&self, user_id_param: &str) -> Result<Vec<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let snapshots_db = portfolio_snapshots::table
            .filter(portfolio_snapshots::user_id.eq(user_id_param))
            .select(PortfolioSnapshotDB::as_select())
            .order(portfolio_snapshots::snapshot_date.asc())
            .load::<PortfolioSnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(snapshots_db
            .into_iter()
            .map(PortfolioSnapshot::from)
            .collect())
    }
}
