//! Error types for stock operations

use thiserror::Error;

use crate::database::DatabaseError;

/// Message for lookups that find no stock
pub const MSG_STOCK_NOT_FOUND: &str = "Stock could not be found";

/// Message for rejected stock creation
pub const MSG_INVALID_INPUT: &str = "Supplied input is invalid";

/// Errors that can occur during stock operations
///
/// # Error Categories
///
/// - **Client Errors**: `InvalidArgument`, `InvalidInput`, `ConstraintViolation`
/// - **State Errors**: `NotFound`
/// - **Internal Errors**: `Database`
#[derive(Debug, Error)]
pub enum StockError {
    /// A required identifier or field was missing; raised before the store is touched
    #[error("{0}")]
    InvalidArgument(String),

    /// No stock exists with the requested id
    #[error("{}", MSG_STOCK_NOT_FOUND)]
    NotFound,

    /// Creation rejected: blank name or negative price (deliberately not distinguished)
    #[error("{}", MSG_INVALID_INPUT)]
    InvalidInput,

    /// A request parameter violated an endpoint constraint
    #[error("{0}")]
    ConstraintViolation(String),

    /// The store failed
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl StockError {
    /// Build an `InvalidArgument` for a missing field
    pub fn null_field(field: &str) -> Self {
        StockError::InvalidArgument(format!("{} must not be null", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StockError::NotFound.to_string(), MSG_STOCK_NOT_FOUND);
        assert_eq!(StockError::InvalidInput.to_string(), MSG_INVALID_INPUT);
        assert_eq!(
            StockError::null_field("Stock id").to_string(),
            "Stock id must not be null"
        );
    }

    #[test]
    fn test_database_error_display() {
        let err = StockError::from(DatabaseError::QueryError("timeout".to_string()));

        assert!(matches!(err, StockError::Database(_)));
        assert!(err.to_string().starts_with("Database error: "));
        assert!(err.to_string().ends_with("timeout"));
    }
}
