//! Single-writer actor for the SQLite database.
//!
//! SQLite allows one writer at a time. Instead of letting pool connections
//! race for the write lock, every write job is sent to one background task
//! that owns a dedicated connection and runs each job inside an immediate
//! transaction. Reads keep using the pool directly.

use std::any::Any;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use paperfolio_core::errors::Result;

use super::DbPool;
use crate::errors::StorageError;

/// A write job: runs against the actor's connection, inside a transaction.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// The boxed form jobs travel through the channel in; return values are
/// type-erased so one channel serves every job type.
type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor. Cheap to clone; every
/// repository holds one.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Runs a write job on the writer's connection and waits for its
    /// result. The job either commits as a whole or rolls back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        reply_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns the background task that serializes all database writes.
/// The actor holds one pool connection for its whole lifetime and stops
/// when the last `WriteHandle` is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            // Immediate transactions take the write lock up front, so a
            // job never fails midway because a reader got there first.
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Ignore send failures: the requester may have stopped
            // waiting, but the write already committed or rolled back.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
