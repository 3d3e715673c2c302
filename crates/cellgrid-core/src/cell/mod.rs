//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangle of cells (e.g., "A1:B10")
//! - [`CellData`] - A cell's raw text, format and declared type
//! - [`CellStore`] - Sparse storage of cells

mod address;
mod data;
mod storage;

pub use address::{column_to_letters, letters_to_column, CellAddress, CellRange, CellRangeIterator};
pub use data::CellData;
pub use storage::CellStore;
