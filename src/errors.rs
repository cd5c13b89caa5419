//! Unified error types and result handling.
//!
//! Every operation surfaces one of these variants to the caller; nothing is
//! swallowed or retried. A failed write leaves the ledger untouched because all
//! validation happens before the single insert commits.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// All error kinds the inventory system can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Operation referenced an item tuple never created via add-item/stock-in
    #[error("unknown item: {name} {size} {category} (register it with add-item or stock-in first)")]
    UnknownItem {
        /// Style name of the missing item
        name: String,
        /// Size of the missing item
        size: String,
        /// Category of the missing item
        category: String,
    },

    /// Employee name could not be resolved where auto-creation is disallowed
    #[error("unknown employee: {name}")]
    UnknownEmployee {
        /// The name that failed to resolve
        name: String,
    },

    /// The operation would drive the item's balance negative
    #[error("insufficient stock: {available} on hand, {requested} requested")]
    InsufficientStock {
        /// Balance at the time of the check
        available: i64,
        /// Quantity the operation tried to remove
        requested: i64,
    },

    /// Zero or negative where a positive quantity is required, or a zero
    /// adjustment delta
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected value
        quantity: i64,
    },

    /// Duplicate unique key or dangling foreign-key reference
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Persistence layer unreachable
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error (bad URL, empty name, etc.)
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(
                SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
            ) => Self::ConstraintViolation(msg),
            _ => match err {
                DbErr::Conn(e) => Self::StoreUnavailable(e.to_string()),
                DbErr::ConnectionAcquire(e) => Self::StoreUnavailable(e.to_string()),
                other => Self::Database(other.to_string()),
            },
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
