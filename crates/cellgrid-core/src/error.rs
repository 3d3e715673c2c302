//! Error types for cellgrid-core

use thiserror::Error;

use crate::validation::DeclaredType;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellgrid-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Entered text does not match the cell's declared type
    #[error("Value for {address} does not match declared type {expected}")]
    ValidationMismatch {
        address: String,
        expected: DeclaredType,
    },
}
