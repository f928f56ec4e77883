//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                             │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)   I/O + serde errors (JSON target)      │
//! │       │                              │                              │
//! │       └──────────────┬───────────────┘                              │
//! │                      ▼                                              │
//! │  StoreError (this module) ← Adds context and categorization         │
//! │                      │                                              │
//! │                      ▼                                              │
//! │  Caller decides: retry, report, or abort                            │
//! │                                                                     │
//! │  InvalidTarget is the one caller-fault variant: an unrecognized     │
//! │  save target is fatal to the call and never retried.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested save target is not one of the recognized values.
    ///
    /// ## When This Occurs
    /// - Parsing a target string other than "Database" or "JSON"
    ///
    /// Structurally invalid call: fatal, not retried.
    #[error("Invalid save target: '{target}' (expected \"Database\" or \"JSON\")")]
    InvalidTarget { target: String },

    /// Entity not found in the database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate order number
    /// - Duplicate line number within one order
    #[error("Duplicate {field}: already exists")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Serializing an order for the JSON target failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing a JSON file failed.
    #[error("File write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Internal database error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidTarget error identifying the bad target string.
    pub fn invalid_target(target: impl Into<String>) -> Self {
        StoreError::InvalidTarget {
            target: target.into(),
        }
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → StoreError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → StoreError::PoolExhausted
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // UNIQUE: "UNIQUE constraint failed: <table>.<column>"
                // FK:     "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    StoreError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    StoreError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    StoreError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,

            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_message_identifies_bad_value() {
        let err = StoreError::invalid_target("Unknown");
        assert!(err.to_string().contains("'Unknown'"));
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Order", "1001");
        assert_eq!(err.to_string(), "Order not found: 1001");
    }
}
