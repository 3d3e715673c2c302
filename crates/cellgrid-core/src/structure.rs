//! Structural edits
//!
//! Row/column insertion and deletion, and duplicate-row removal. Every
//! operation reads a [`CellStore`] and returns a complete new snapshot; the
//! source store is never touched, so a partially shifted grid can never be
//! observed. Content shifted past the last row or column is dropped.
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{structure, CellAddress, CellStore};
//!
//! let mut store = CellStore::new();
//! store.set(CellAddress::new(0, 0), "top", None).unwrap();
//! store.set(CellAddress::new(1, 0), "below", None).unwrap();
//!
//! let shifted = structure::insert_row_below(&store, 0);
//! assert_eq!(shifted.raw_value(&CellAddress::new(0, 0)), "top");
//! assert_eq!(shifted.raw_value(&CellAddress::new(1, 0)), "");
//! assert_eq!(shifted.raw_value(&CellAddress::new(2, 0)), "below");
//! ```

use std::fmt;

use ahash::AHashMap;

use crate::cell::{CellAddress, CellStore};
use crate::error::Result;

/// Separator between key-column values in a duplicate key
const KEY_SEPARATOR: &str = "\u{1F}";

/// Kind of row/column edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructuralEdit {
    /// Insert an empty row below the anchor row
    InsertRowBelow,
    /// Insert an empty column right of the anchor column
    InsertColumnRight,
    /// Delete the anchor row
    DeleteRow,
    /// Delete the anchor column
    DeleteColumn,
}

impl StructuralEdit {
    /// Check whether applying this edit at `anchor` removes `selection`
    pub fn removes(&self, anchor: &CellAddress, selection: &CellAddress) -> bool {
        match self {
            StructuralEdit::DeleteRow => selection.row == anchor.row,
            StructuralEdit::DeleteColumn => selection.col == anchor.col,
            StructuralEdit::InsertRowBelow | StructuralEdit::InsertColumnRight => false,
        }
    }
}

impl fmt::Display for StructuralEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructuralEdit::InsertRowBelow => "insert row below",
            StructuralEdit::InsertColumnRight => "insert column right",
            StructuralEdit::DeleteRow => "delete row",
            StructuralEdit::DeleteColumn => "delete column",
        };
        f.write_str(name)
    }
}

/// Apply a row/column edit anchored at an address
pub fn apply(store: &CellStore, edit: StructuralEdit, anchor: CellAddress) -> CellStore {
    match edit {
        StructuralEdit::InsertRowBelow => insert_row_below(store, anchor.row),
        StructuralEdit::InsertColumnRight => insert_column_right(store, anchor.col),
        StructuralEdit::DeleteRow => delete_row(store, anchor.row),
        StructuralEdit::DeleteColumn => delete_column(store, anchor.col),
    }
}

/// Insert an empty row below `at_row`
///
/// Every row after `at_row` moves down by one; the last row's content is
/// discarded.
pub fn insert_row_below(store: &CellStore, at_row: u32) -> CellStore {
    let shifted = relocate(store, |addr| {
        if addr.row > at_row {
            addr.row
                .checked_add(1)
                .map(|row| CellAddress::new(row, addr.col))
        } else {
            Some(addr)
        }
    });
    log::debug!(
        "inserted row below row index {}: {} of {} cells kept",
        at_row,
        shifted.len(),
        store.len()
    );
    shifted
}

/// Insert an empty column right of `at_col`
///
/// Every column after `at_col` moves right by one; the last column's content
/// is discarded.
pub fn insert_column_right(store: &CellStore, at_col: u32) -> CellStore {
    let shifted = relocate(store, |addr| {
        if addr.col > at_col {
            addr.col
                .checked_add(1)
                .map(|col| CellAddress::new(addr.row, col))
        } else {
            Some(addr)
        }
    });
    log::debug!(
        "inserted column right of {}: {} of {} cells kept",
        crate::cell::column_to_letters(at_col),
        shifted.len(),
        store.len()
    );
    shifted
}

/// Delete `at_row`, moving every later row up by one
///
/// The last row ends up empty.
pub fn delete_row(store: &CellStore, at_row: u32) -> CellStore {
    let shifted = relocate(store, |addr| match addr.row {
        r if r == at_row => None,
        r if r > at_row => Some(CellAddress::new(r - 1, addr.col)),
        _ => Some(addr),
    });
    log::debug!(
        "deleted row index {}: {} of {} cells kept",
        at_row,
        shifted.len(),
        store.len()
    );
    shifted
}

/// Delete `at_col`, moving every later column left by one
///
/// The last column ends up empty.
pub fn delete_column(store: &CellStore, at_col: u32) -> CellStore {
    let shifted = relocate(store, |addr| match addr.col {
        c if c == at_col => None,
        c if c > at_col => Some(CellAddress::new(addr.row, c - 1)),
        _ => Some(addr),
    });
    log::debug!(
        "deleted column {}: {} of {} cells kept",
        crate::cell::column_to_letters(at_col),
        shifted.len(),
        store.len()
    );
    shifted
}

/// Build a new snapshot by moving each cell to `target(addr)`
///
/// Cells mapped to `None` or outside the bounds are dropped.
fn relocate<F>(store: &CellStore, target: F) -> CellStore
where
    F: Fn(CellAddress) -> Option<CellAddress>,
{
    let mut out = store.empty_like();
    for (addr, data) in store.iter() {
        if let Some(dest) = target(addr) {
            out.put(dest, data.clone());
        }
    }
    out
}

/// Result of removing duplicate rows
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateRemoval {
    /// The new snapshot
    pub store: CellStore,
    /// Sum over distinct keys of (occurrences - 1)
    pub duplicate_count: usize,
    /// Rows removed, ascending, as indexed before the removal
    pub removed_rows: Vec<u32>,
}

/// Summary of duplicate detection over a row scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateScan {
    /// Rows that repeat an earlier row's key, ascending
    pub duplicate_rows: Vec<u32>,
    /// Sum over distinct keys of (occurrences - 1)
    pub duplicate_count: usize,
}

/// Find rows whose key-column values repeat an earlier row in scope
///
/// Rows are visited in ascending order; the first occurrence of each key is
/// kept. Key columns are read in column order with absent cells as empty
/// text. Rows whose key columns are all empty are not considered. Rows or
/// columns outside the grid are rejected.
pub fn scan_duplicate_rows(
    store: &CellStore,
    rows_in_scope: &[u32],
    key_columns: &[u32],
) -> Result<DuplicateScan> {
    let bounds = store.bounds();
    for &row in rows_in_scope {
        bounds.check(&CellAddress::new(row, 0))?;
    }
    for &col in key_columns {
        bounds.check(&CellAddress::new(0, col))?;
    }

    let mut rows = rows_in_scope.to_vec();
    rows.sort_unstable();
    rows.dedup();
    let mut columns = key_columns.to_vec();
    columns.sort_unstable();
    columns.dedup();

    if columns.is_empty() {
        return Ok(DuplicateScan::default());
    }

    let mut occurrences: AHashMap<String, usize> = AHashMap::new();
    let mut duplicate_rows = Vec::new();

    for row in rows {
        let values: Vec<&str> = columns
            .iter()
            .map(|&col| store.raw_value(&CellAddress::new(row, col)))
            .collect();
        if values.iter().all(|v| v.is_empty()) {
            continue;
        }

        let key = values.join(KEY_SEPARATOR);
        let seen = occurrences.entry(key).or_insert(0);
        *seen += 1;
        if *seen > 1 {
            duplicate_rows.push(row);
        }
    }

    let duplicate_count = occurrences.values().map(|n| n - 1).sum();
    Ok(DuplicateScan {
        duplicate_rows,
        duplicate_count,
    })
}

/// Count duplicate rows without changing anything
pub fn count_duplicate_rows(
    store: &CellStore,
    rows_in_scope: &[u32],
    key_columns: &[u32],
) -> Result<usize> {
    Ok(scan_duplicate_rows(store, rows_in_scope, key_columns)?.duplicate_count)
}

/// Remove rows that repeat an earlier row's key
///
/// Each removed row shifts every row below it up by one. Removing in
/// descending order keeps earlier indices valid, which is the same as moving
/// each surviving row up by the number of removed rows above it.
pub fn delete_duplicate_rows(
    store: &CellStore,
    rows_in_scope: &[u32],
    key_columns: &[u32],
) -> Result<DuplicateRemoval> {
    let scan = scan_duplicate_rows(store, rows_in_scope, key_columns)?;
    let removed = &scan.duplicate_rows;

    let shifted = if removed.is_empty() {
        store.clone()
    } else {
        relocate(store, |addr| {
            let above = removed.partition_point(|&r| r < addr.row);
            match removed.get(above) {
                Some(&r) if r == addr.row => None,
                _ => Some(CellAddress::new(addr.row - above as u32, addr.col)),
            }
        })
    };

    log::debug!(
        "removed {} duplicate rows ({} duplicates counted)",
        removed.len(),
        scan.duplicate_count
    );

    Ok(DuplicateRemoval {
        store: shifted,
        duplicate_count: scan.duplicate_count,
        removed_rows: scan.duplicate_rows,
    })
}
