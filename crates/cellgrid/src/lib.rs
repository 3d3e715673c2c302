//! # cellgrid
//!
//! A grid-backed cell store with on-demand formula evaluation.
//!
//! ## Features
//!
//! - A1-style addressing over a fixed grid (100 x 26 by default)
//! - Sparse cell storage with optional formatting and declared types
//! - Range aggregates (`SUM`, `AVERAGE`, `MAX`, `MIN`, `COUNT`) and text
//!   functions (`TRIM`, `UPPER`, `LOWER`, `PROPER`) with cycle detection
//! - Row/column insertion and deletion, duplicate-row removal
//!
//! ## Example
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.write_cell("A1", "1").unwrap();
//! sheet.write_cell("A2", "x").unwrap();
//! sheet.write_cell("A3", "3").unwrap();
//! sheet.write_cell("B1", "=SUM(A1,A3)").unwrap();
//! assert_eq!(sheet.evaluate_for_display("B1").unwrap(), "4");
//!
//! // Insert a row below row 1; A2 and A3 move down, the formula does not change
//! sheet.apply_structural_edit(StructuralEdit::InsertRowBelow, "A1").unwrap();
//! assert_eq!(sheet.read_cell("A4").unwrap().raw_value, "3");
//! assert_eq!(sheet.evaluate_for_display("B1").unwrap(), "1");
//! ```

pub mod prelude;
pub mod settings;
pub mod sheet;

pub use settings::SheetSettings;
pub use sheet::{Sheet, StructuralEditOutcome};

// Re-export core types
pub use cellgrid_core::{
    column_to_letters, letters_to_column, structure, CellAddress, CellData, CellFormat, CellRange,
    CellStore, Color, DeclaredType, DuplicateRemoval, DuplicateScan, Error, GridBounds,
    HorizontalAlignment, Result, StructuralEdit, DEFAULT_COLS, DEFAULT_ROWS,
};

// Re-export formula types
pub use cellgrid_formula::{
    parse_formula, suggest_functions, EvaluationOptions, Evaluator, FormulaCall, FormulaError,
    FunctionDef, FunctionKind, ERROR_SENTINEL,
};
