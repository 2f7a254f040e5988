//! Unified error type for the Fish-Smart data core.
//!
//! Storage failures (including constraint violations raised by the engine) are
//! carried through unchanged in [`Error::Database`]; the remaining variants are
//! raised by the application before anything reaches the database.

use sea_orm::SqlErr;
use thiserror::Error;

/// Every failure the crate reports.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any error reported by `SeaORM` or the underlying engine
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Reading a seed input (the stylesheet) failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is outside its documented bounds
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Column or argument that failed validation
        field: &'static str,
        /// Human readable reason
        message: String,
    },

    /// A referenced row does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of row that was looked up
        entity: &'static str,
        /// Identifier used for the lookup
        id: String,
    },

    /// The operation would duplicate an existing row
    #[error("Conflict: {message}")]
    Conflict {
        /// Human readable reason
        message: String,
    },

    /// Deleting the row was rejected because other rows still reference it
    #[error("{entity} {id} is still referenced and cannot be deleted")]
    ReferencedRow {
        /// Kind of row that could not be deleted
        entity: &'static str,
        /// Identifier of that row
        id: String,
    },
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Shorthand for building a [`Error::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Returns true when the database error is a foreign-key violation.
#[must_use]
pub fn is_foreign_key_violation(err: &sea_orm::DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

/// Returns true when the database error is a unique / primary-key violation.
#[must_use]
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
