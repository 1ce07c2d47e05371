//! Error types for querykit

use thiserror::Error;

/// Result type alias for querykit operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for statement construction and execution
#[derive(Debug, Error)]
pub enum QueryError {
    /// No statement kind has its required fields populated
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    /// Operator symbol outside the supported set
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Insert rows whose column sets disagree with the first row
    #[error("Malformed insert rows: row {row} has columns [{found}], expected [{expected}]")]
    MalformedInsertRows {
        row: usize,
        expected: String,
        found: String,
    },

    /// Condition input with an unrecognized shape
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),
}

impl QueryError {
    /// Create an invalid statement error
    pub fn invalid_statement(message: impl Into<String>) -> Self {
        Self::InvalidStatement(message.into())
    }

    /// Create an unsupported operator error
    pub fn unsupported_operator(symbol: impl Into<String>) -> Self {
        Self::UnsupportedOperator(symbol.into())
    }

    /// Create an invalid condition error
    pub fn invalid_condition(message: impl Into<String>) -> Self {
        Self::InvalidCondition(message.into())
    }

    /// Create a malformed insert rows error from the offending row's columns.
    pub fn malformed_insert_rows(row: usize, expected: &[&str], found: &[&str]) -> Self {
        Self::MalformedInsertRows {
            row,
            expected: expected.join(", "),
            found: found.join(", "),
        }
    }

    /// Check if this is an invalid statement error
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self, Self::InvalidStatement(_))
    }

    /// Check if this is an unsupported operator error
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self, Self::UnsupportedOperator(_))
    }

    /// Check if this is a malformed insert rows error
    pub fn is_malformed_insert_rows(&self) -> bool {
        matches!(self, Self::MalformedInsertRows { .. })
    }
}
