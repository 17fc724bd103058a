//! Error types for store operations

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Rejected input, such as an empty constant or a variable inside a fact
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A triple was built from a term list that does not hold exactly three terms
    #[error("Invalid arity: a triple must contain exactly 3 terms, got {0}")]
    InvalidArity(usize),

    /// Lookup of an identifier the dictionary never issued
    #[error("Not found: {0}")]
    NotFound(String),

    /// Parse error when reading facts or queries
    #[error("Parse error: {0}")]
    Parse(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl From<regex::Error> for StoreError {
    fn from(err: regex::Error) -> Self {
        StoreError::Parse(err.to_string())
    }
}

impl From<oxigraph::io::RdfParseError> for StoreError {
    fn from(err: oxigraph::io::RdfParseError) -> Self {
        StoreError::Parse(err.to_string())
    }
}

impl From<oxigraph::store::StorageError> for StoreError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        StoreError::Query(err.to_string())
    }
}

impl From<oxigraph::sparql::QueryEvaluationError> for StoreError {
    fn from(err: oxigraph::sparql::QueryEvaluationError) -> Self {
        StoreError::Query(err.to_string())
    }
}
