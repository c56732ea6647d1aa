use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors raised while reading server settings from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Errors surfaced by the persistence layer.
///
/// Database failures are passed through as-is; the helpers below only
/// classify them so callers can tell constraint violations apart.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DieselError),
    #[error("connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),
}

impl StoreError {
    fn database_kind(&self) -> Option<&DatabaseErrorKind> {
        match self {
            StoreError::Database(DieselError::DatabaseError(kind, _)) => Some(kind),
            _ => None,
        }
    }

    /// Insert or update would duplicate a value in a unique column
    pub fn is_unique_violation(&self) -> bool {
        matches!(self.database_kind(), Some(DatabaseErrorKind::UniqueViolation))
    }

    /// Row references a parent that does not exist
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.database_kind(), Some(DatabaseErrorKind::ForeignKeyViolation))
    }
}
