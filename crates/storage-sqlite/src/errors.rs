//! Error plumbing between Diesel and the core error types.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use paperfolio_core::errors::{DatabaseError, Error};

/// Failures raised inside the storage layer, in Diesel's own terms.
///
/// Nothing outside this crate sees a `StorageError`; repositories convert
/// to `paperfolio_core::Error` at their boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Core error: {0}")]
    CoreError(String),
}

/// The write actor runs jobs that return core errors inside transactions
/// that need a single rollback error type.
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let database_error = match err {
            StorageError::ConnectionFailed(e) => DatabaseError::ConnectionFailed(e.to_string()),
            StorageError::PoolError(e) => DatabaseError::PoolCreationFailed(e.to_string()),
            StorageError::QueryFailed(e) => classify_diesel_error(e),
            StorageError::CoreError(e) => DatabaseError::Internal(e),
        };
        Error::Database(database_error)
    }
}

/// Maps constraint failures onto their dedicated variants so callers can
/// match on them; everything else is a plain query failure.
fn classify_diesel_error(err: DieselError) -> DatabaseError {
    match err {
        DieselError::NotFound => DatabaseError::NotFound("Record not found".to_string()),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DatabaseError::UniqueViolation(info.message().to_string())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            DatabaseError::ForeignKeyViolation(info.message().to_string())
        }
        other => DatabaseError::QueryFailed(other.to_string()),
    }
}
