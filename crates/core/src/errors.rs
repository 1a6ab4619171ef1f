//! Error types shared across the paperfolio crates.
//!
//! Storage backends translate their implementation-specific failures
//! (Diesel, SQLite, connection pooling) into the database-agnostic
//! variants defined here before an error crosses the crate boundary.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

use paperfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("{0}")]
    Trade(#[from] TradeError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database failures in storage-independent form.
///
/// Details are carried as `String` so this crate stays free of Diesel
/// and SQLite types; the storage crate does the translation.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Opening a connection to the database failed.
    #[error("Could not connect to the database: {0}")]
    ConnectionFailed(String),

    /// Building or configuring the connection pool failed.
    #[error("Could not create the connection pool: {0}")]
    PoolCreationFailed(String),

    /// A query failed for a reason none of the other variants cover.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The row asked for does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// An insert or update hit a unique index.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A write referenced a row that does not exist.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Running the embedded migrations failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A failure the storage layer could not classify.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Business rejections for trade submissions.
///
/// The display strings are the user-facing rejection messages; the fields
/// carry the exact amounts for structured consumers.
#[derive(Error, Debug)]
pub enum TradeError {
    /// A buy order costs more than the available cash.
    #[error("Not enough cash to complete this trade.")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    /// A sell order asks for more shares than the portfolio holds.
    #[error("You do not have enough shares to sell.")]
    InsufficientShares {
        symbol: String,
        requested: Decimal,
        held: Decimal,
    },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid decimal value: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid date/time value: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
