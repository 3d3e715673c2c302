//! # cellgrid-core
//!
//! Core data structures for the cellgrid spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout cellgrid:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`CellData`] - A cell's raw text, format and declared type
//! - [`CellStore`] - Sparse cell storage inside fixed [`GridBounds`]
//! - [`structure`] - Row/column insertion and deletion, duplicate-row removal
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{CellAddress, CellStore};
//!
//! let mut store = CellStore::new();
//! let a1: CellAddress = "A1".parse().unwrap();
//! store.set(a1, "42", None).unwrap();
//!
//! assert_eq!(store.raw_value(&a1), "42");
//! assert_eq!(a1.to_string(), "A1");
//! ```

pub mod bounds;
pub mod cell;
pub mod error;
pub mod structure;
pub mod style;
pub mod validation;

// Re-exports for convenience
pub use bounds::{GridBounds, DEFAULT_COLS, DEFAULT_ROWS};
pub use cell::{column_to_letters, letters_to_column, CellAddress, CellData, CellRange, CellStore};
pub use error::{Error, Result};
pub use structure::{DuplicateRemoval, DuplicateScan, StructuralEdit};
pub use style::{CellFormat, Color, HorizontalAlignment};
pub use validation::DeclaredType;
