//! Grid dimensions

use crate::cell::CellAddress;
use crate::error::{Error, Result};

/// Default number of rows in a grid
pub const DEFAULT_ROWS: u32 = 100;

/// Default number of columns in a grid (A-Z)
pub const DEFAULT_COLS: u32 = 26;

/// Fixed rectangle of valid addresses
///
/// Structural edits never grow a grid; content shifted past the last row or
/// column is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GridBounds {
    /// Create bounds with at least one row and one column
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Index of the last row
    ///
    /// Bounds built without [`GridBounds::new`] may have zero rows; they
    /// contain no address and report `0` here.
    pub fn last_row(&self) -> u32 {
        self.rows.saturating_sub(1)
    }

    /// Index of the last column
    pub fn last_col(&self) -> u32 {
        self.cols.saturating_sub(1)
    }

    /// Check if an address lies inside the grid
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row < self.rows && addr.col < self.cols
    }

    /// Fail with an out-of-bounds error if the address lies outside the grid
    pub fn check(&self, addr: &CellAddress) -> Result<()> {
        if addr.row >= self.rows {
            return Err(Error::RowOutOfBounds(addr.row, self.last_row()));
        }
        if addr.col >= self.cols {
            return Err(Error::ColumnOutOfBounds(addr.col, self.last_col()));
        }
        Ok(())
    }
}
