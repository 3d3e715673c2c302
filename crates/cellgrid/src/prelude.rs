//! Prelude module - common imports for cellgrid users
//!
//! ```rust
//! use cellgrid::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellData,
    CellFormat,
    CellRange,
    CellStore,
    Color,
    DeclaredType,
    // Error types
    Error,
    EvaluationOptions,
    GridBounds,
    HorizontalAlignment,
    Result,
    // Main types
    Sheet,
    SheetSettings,
    StructuralEdit,
    StructuralEditOutcome,
    ERROR_SENTINEL,
};
