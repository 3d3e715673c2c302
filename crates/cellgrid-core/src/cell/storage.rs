//! Cell storage implementation
//!
//! Sparse storage for grid cells. Only cells with non-empty raw text are
//! stored, using a row-based BTreeMap structure.

use std::collections::BTreeMap;

use super::{CellAddress, CellData, CellRange};
use crate::bounds::GridBounds;
use crate::error::Result;
use crate::style::CellFormat;
use crate::validation::DeclaredType;

/// Sparse row-based storage for grid cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellData>>`, which
/// keeps iteration in row-major order.
///
/// Structural edits never mutate a store in place: they build a complete new
/// snapshot which the owner swaps in with [`CellStore::bulk_replace`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStore {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u32, CellData>>,
    /// Valid address rectangle
    bounds: GridBounds,
}

impl CellStore {
    /// Create an empty store with the default 100 x 26 bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given bounds
    pub fn with_bounds(bounds: GridBounds) -> Self {
        Self {
            rows: BTreeMap::new(),
            bounds,
        }
    }

    /// Create an empty store sharing this store's bounds
    pub fn empty_like(&self) -> Self {
        Self::with_bounds(self.bounds)
    }

    /// Get the grid bounds
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Get a cell
    pub fn get(&self, addr: &CellAddress) -> Option<&CellData> {
        self.get_at(addr.row, addr.col)
    }

    /// Get a cell by row and column indices
    pub fn get_at(&self, row: u32, col: u32) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a cell's raw text, or an empty string if absent
    pub fn raw_value(&self, addr: &CellAddress) -> &str {
        self.get(addr).map_or("", |c| c.raw_value.as_str())
    }

    /// Set a cell's raw text
    ///
    /// Replaces or creates the cell. An existing format and declared type are
    /// kept unless `format` is given. An empty `raw_value` deletes the cell.
    pub fn set<S: Into<String>>(
        &mut self,
        addr: CellAddress,
        raw_value: S,
        format: Option<CellFormat>,
    ) -> Result<()> {
        self.bounds.check(&addr)?;

        let raw_value = raw_value.into();
        if raw_value.is_empty() {
            self.delete(&addr);
            return Ok(());
        }

        let row_map = self.rows.entry(addr.row).or_default();
        let cell = row_map.entry(addr.col).or_default();
        cell.raw_value = raw_value;
        if format.is_some() {
            cell.format = format;
        }
        Ok(())
    }

    /// Store a complete cell record
    ///
    /// An empty record deletes the cell.
    pub fn set_cell(&mut self, addr: CellAddress, data: CellData) -> Result<()> {
        self.bounds.check(&addr)?;
        self.put(addr, data);
        Ok(())
    }

    /// Apply a format to an existing cell
    ///
    /// Returns `false` and leaves the store unchanged if the cell is absent.
    pub fn set_format(&mut self, addr: &CellAddress, format: CellFormat) -> bool {
        match self.get_mut(addr) {
            Some(cell) => {
                cell.format = Some(format);
                true
            }
            None => false,
        }
    }

    /// Attach a declared type to an existing cell
    ///
    /// Returns `false` and leaves the store unchanged if the cell is absent.
    pub fn set_declared_type(&mut self, addr: &CellAddress, declared_type: DeclaredType) -> bool {
        match self.get_mut(addr) {
            Some(cell) => {
                cell.declared_type = Some(declared_type);
                true
            }
            None => false,
        }
    }

    /// Remove a cell
    pub fn delete(&mut self, addr: &CellAddress) -> Option<CellData> {
        let row_map = self.rows.get_mut(&addr.row)?;
        let removed = row_map.remove(&addr.col);

        // Clean up empty rows
        if row_map.is_empty() {
            self.rows.remove(&addr.row);
        }

        removed
    }

    /// Swap in a complete new snapshot
    ///
    /// Readers never observe a partially shifted grid.
    pub fn bulk_replace(&mut self, snapshot: CellStore) {
        *self = snapshot;
    }

    /// Remove all cells
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &CellData)> {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, data)| (CellAddress::new(row, col), data))
        })
    }

    /// Iterate over the cells of one row in column order
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (u32, &CellData)> {
        self.rows
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, data)| (col, data)))
    }

    /// Indices of rows holding at least one cell
    pub fn occupied_rows(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Get the range of cells that contain data
    pub fn used_range(&self) -> Option<CellRange> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;
        let min_col = self.rows.values().filter_map(|c| c.keys().next()).min()?;
        let max_col = self
            .rows
            .values()
            .filter_map(|c| c.keys().next_back())
            .max()?;
        Some(CellRange::from_indices(min_row, *min_col, max_row, *max_col))
    }

    fn get_mut(&mut self, addr: &CellAddress) -> Option<&mut CellData> {
        self.rows.get_mut(&addr.row).and_then(|r| r.get_mut(&addr.col))
    }

    /// Place a relocated cell, silently dropping it outside the bounds
    pub(crate) fn put(&mut self, addr: CellAddress, data: CellData) {
        if data.is_empty() {
            self.delete(&addr);
        } else if self.bounds.contains(&addr) {
            self.rows.entry(addr.row).or_default().insert(addr.col, data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut store = CellStore::new();
        store.set(addr("B2"), "hello", None).unwrap();

        assert_eq!(store.raw_value(&addr("B2")), "hello");
        assert_eq!(store.raw_value(&addr("C3")), "");
        assert_eq!(store.len(), 1);
        assert!(store.get(&addr("C3")).is_none());
    }

    #[test]
    fn test_empty_value_deletes() {
        let mut store = CellStore::new();
        store.set(addr("A1"), "x", None).unwrap();
        store.set(addr("A1"), "", None).unwrap();

        assert!(store.get(&addr("A1")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_keeps_existing_format() {
        let mut store = CellStore::new();
        let bold = CellFormat::new().with_bold(true);
        store.set(addr("A1"), "x", Some(bold.clone())).unwrap();
        store.set(addr("A1"), "y", None).unwrap();

        let cell = store.get(&addr("A1")).unwrap();
        assert_eq!(cell.raw_value, "y");
        assert_eq!(cell.format, Some(bold));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut store = CellStore::new();
        assert_eq!(
            store.set(addr("A101"), "x", None),
            Err(Error::RowOutOfBounds(100, 99))
        );
        assert_eq!(
            store.set(addr("AA1"), "x", None),
            Err(Error::ColumnOutOfBounds(26, 25))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_format_and_type_need_existing_cell() {
        let mut store = CellStore::new();
        assert!(!store.set_format(&addr("A1"), CellFormat::new().with_bold(true)));
        assert!(!store.set_declared_type(&addr("A1"), DeclaredType::Number));
        assert!(store.is_empty());

        store.set(addr("A1"), "5", None).unwrap();
        assert!(store.set_declared_type(&addr("A1"), DeclaredType::Number));
        assert_eq!(
            store.get(&addr("A1")).unwrap().declared_type,
            Some(DeclaredType::Number)
        );
    }

    #[test]
    fn test_iteration_is_row_major() {
        let mut store = CellStore::new();
        store.set(addr("B2"), "4", None).unwrap();
        store.set(addr("A2"), "3", None).unwrap();
        store.set(addr("C1"), "2", None).unwrap();
        store.set(addr("A1"), "1", None).unwrap();

        let order: Vec<_> = store.iter().map(|(a, _)| a.to_string()).collect();
        assert_eq!(order, vec!["A1", "C1", "A2", "B2"]);
        assert_eq!(store.used_range(), Some(CellRange::parse("A1:C2").unwrap()));
    }

    #[test]
    fn test_bulk_replace() {
        let mut store = CellStore::new();
        store.set(addr("A1"), "old", None).unwrap();

        let mut snapshot = store.empty_like();
        snapshot.set(addr("B1"), "new", None).unwrap();
        store.bulk_replace(snapshot);

        assert!(store.get(&addr("A1")).is_none());
        assert_eq!(store.raw_value(&addr("B1")), "new");
    }

    #[test]
    fn test_delete_cleans_up() {
        let mut store = CellStore::new();
        store.set(addr("A1"), "x", None).unwrap();
        assert_eq!(store.delete(&addr("A1")).unwrap().raw_value, "x");
        assert!(store.delete(&addr("A1")).is_none());
        assert_eq!(store.occupied_rows().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serde() {
        let mut store = CellStore::new();
        store.set(addr("C7"), "=SUM(A1,A2)", None).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        let restored: CellStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
    }
}
