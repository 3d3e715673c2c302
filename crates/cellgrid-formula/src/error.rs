//! Formula error types
//!
//! These never reach a cell's display: every evaluation path that produces
//! display text maps them to [`ERROR_SENTINEL`](crate::ERROR_SENTINEL).

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Formula parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Reference to an address outside the grid
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// A formula depends on its own value
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(String),

    /// Formula references nest deeper than allowed
    #[error("Formula nesting exceeds {0} levels")]
    DepthExceeded(usize),
}

impl FormulaError {
    /// Check if this error came from a reference cycle
    pub fn is_circular(&self) -> bool {
        matches!(self, FormulaError::CircularReference(_))
    }

    /// Errors that abort every formula on the reference chain instead of
    /// only blanking out the offending cell
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FormulaError::CircularReference(_) | FormulaError::DepthExceeded(_)
        )
    }
}
