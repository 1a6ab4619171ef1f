//! SQLite storage implementation for Paperfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `paperfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Everything else is database-agnostic and works with traits.
//!
//! All writes funnel through a single writer actor (see [`db::write_actor`]),
//! which keeps SQLite happy under concurrent use and gives every write job
//! its own immediate transaction.

pub mod db;
pub mod errors;
pub mod schema;
pub(crate) mod utils;

// Repository implementations
pub mod holdings;
pub mod portfolios;
pub mod snapshots;
pub mod trades;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from paperfolio-core for convenience
pub use paperfolio_core::errors::{DatabaseError, Error, Result};
