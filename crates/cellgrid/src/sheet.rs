//! Sheet - the cell grid as seen by a presentation layer

use crate::settings::SheetSettings;
use cellgrid_core::structure::{self, StructuralEdit};
use cellgrid_core::{CellAddress, CellData, CellFormat, CellStore, DeclaredType, Error, Result};
use cellgrid_formula::Evaluator;
use log::debug;

/// What happened to the sheet's selection during a structural edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralEditOutcome {
    /// The edit that was applied
    pub edit: StructuralEdit,
    /// Where it was anchored
    pub anchor: CellAddress,
    /// The selected cell was in the deleted row or column and has been cleared
    pub selection_cleared: bool,
}

/// A single grid of cells
///
/// Owns the cell store and the current selection. All mutation goes through
/// the methods here; structural edits build a new snapshot and swap it in.
///
/// # Example
///
/// ```rust
/// use cellgrid::prelude::*;
///
/// let mut sheet = Sheet::new();
/// sheet.write_cell("A1", "1").unwrap();
/// sheet.write_cell("A2", "2").unwrap();
/// sheet.write_cell("A3", "=SUM(A1,A2)").unwrap();
///
/// assert_eq!(sheet.evaluate_for_display("A3").unwrap(), "3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    store: CellStore,
    settings: SheetSettings,
    selection: Option<CellAddress>,
}

impl Sheet {
    /// Create an empty sheet with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sheet with custom settings
    pub fn with_settings(settings: SheetSettings) -> Self {
        Self {
            store: CellStore::with_bounds(settings.bounds),
            settings,
            selection: None,
        }
    }

    /// Create a sheet around an existing snapshot
    ///
    /// The snapshot's bounds replace those in `settings`.
    pub fn from_store(store: CellStore, mut settings: SheetSettings) -> Self {
        settings.bounds = store.bounds();
        Self {
            store,
            settings,
            selection: None,
        }
    }

    /// Settings in effect
    pub fn settings(&self) -> &SheetSettings {
        &self.settings
    }

    /// Borrow the current snapshot
    pub fn store(&self) -> &CellStore {
        &self.store
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> CellStore {
        self.store.clone()
    }

    /// Replace the whole grid
    pub fn replace_snapshot(&mut self, snapshot: CellStore) {
        self.settings.bounds = snapshot.bounds();
        self.store.bulk_replace(snapshot);
        if let Some(sel) = self.selection {
            if !self.settings.bounds.contains(&sel) {
                self.selection = None;
            }
        }
    }

    // === Cells ===

    /// Read a cell; absent cells come back as an empty record
    pub fn read_cell(&self, address: &str) -> Result<CellData> {
        let addr = CellAddress::parse(address)?;
        Ok(self.store.get(&addr).cloned().unwrap_or_default())
    }

    /// Borrow the cell at `addr`, if present
    pub fn cell(&self, addr: CellAddress) -> Option<&CellData> {
        self.store.get(&addr)
    }

    /// Write a cell's raw text; empty text deletes the cell
    pub fn write_cell(&mut self, address: &str, raw_value: impl Into<String>) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.write_cell_at(addr, raw_value)
    }

    /// Write a cell's raw text by coordinates
    pub fn write_cell_at(&mut self, addr: CellAddress, raw_value: impl Into<String>) -> Result<()> {
        let raw_value = raw_value.into();

        if self.settings.enforce_declared_types {
            if let Some(cell) = self.store.get(&addr) {
                let expected = cell.effective_declared_type();
                if !expected.accepts(&raw_value) {
                    return Err(Error::ValidationMismatch {
                        address: addr.to_a1_string(),
                        expected,
                    });
                }
            }
        }

        self.store.set(addr, raw_value, None)
    }

    /// Apply a format to an existing cell
    ///
    /// Returns `false` if the cell is absent.
    pub fn set_format(&mut self, address: &str, format: CellFormat) -> Result<bool> {
        let addr = CellAddress::parse(address)?;
        self.store.bounds().check(&addr)?;
        Ok(self.store.set_format(&addr, format))
    }

    /// Attach a declared type to an existing cell
    ///
    /// Returns `false` if the cell is absent.
    pub fn set_declared_type(&mut self, address: &str, declared_type: DeclaredType) -> Result<bool> {
        let addr = CellAddress::parse(address)?;
        self.store.bounds().check(&addr)?;
        Ok(self.store.set_declared_type(&addr, declared_type))
    }

    // === Evaluation ===

    /// Display text for a cell
    ///
    /// Literals display as entered, formulas as their evaluated result or
    /// `#ERROR!`. Only an unparseable address is an error.
    pub fn evaluate_for_display(&self, address: &str) -> Result<String> {
        let addr = CellAddress::parse(address)?;
        Ok(self.display_at(addr))
    }

    /// Display text for a cell by coordinates
    pub fn display_at(&self, addr: CellAddress) -> String {
        self.evaluator().display_cell(addr)
    }

    /// Evaluator bound to the current snapshot
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::with_options(&self.store, self.settings.evaluation)
    }

    // === Selection ===

    /// Currently selected cell
    pub fn selection(&self) -> Option<CellAddress> {
        self.selection
    }

    /// Select a cell
    pub fn select(&mut self, address: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.select_at(addr)
    }

    /// Select a cell by coordinates
    pub fn select_at(&mut self, addr: CellAddress) -> Result<()> {
        self.store.bounds().check(&addr)?;
        self.selection = Some(addr);
        Ok(())
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // === Structure ===

    /// Insert or delete a row or column relative to `anchor`
    pub fn apply_structural_edit(
        &mut self,
        edit: StructuralEdit,
        anchor: &str,
    ) -> Result<StructuralEditOutcome> {
        let anchor = CellAddress::parse(anchor)?;
        self.apply_structural_edit_at(edit, anchor)
    }

    /// Insert or delete a row or column relative to `anchor` by coordinates
    pub fn apply_structural_edit_at(
        &mut self,
        edit: StructuralEdit,
        anchor: CellAddress,
    ) -> Result<StructuralEditOutcome> {
        self.store.bounds().check(&anchor)?;

        let snapshot = structure::apply(&self.store, edit, anchor);
        self.store.bulk_replace(snapshot);

        let selection_cleared = match self.selection {
            Some(sel) if edit.removes(&anchor, &sel) => {
                self.selection = None;
                true
            }
            _ => false,
        };
        if selection_cleared {
            debug!("selection cleared by {} at {}", edit, anchor);
        }

        Ok(StructuralEditOutcome {
            edit,
            anchor,
            selection_cleared,
        })
    }

    /// Remove rows whose key columns repeat an earlier row
    ///
    /// Returns the duplicate count (sum over keys of occurrences minus one).
    pub fn delete_duplicates(&mut self, rows_in_scope: &[u32], key_columns: &[u32]) -> Result<usize> {
        let removal = structure::delete_duplicate_rows(&self.store, rows_in_scope, key_columns)?;
        self.store.bulk_replace(removal.store);
        Ok(removal.duplicate_count)
    }

    /// Count duplicates without changing the sheet
    pub fn count_duplicates(&self, rows_in_scope: &[u32], key_columns: &[u32]) -> Result<usize> {
        structure::count_duplicate_rows(&self.store, rows_in_scope, key_columns)
    }
}
