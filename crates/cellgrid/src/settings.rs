//! Sheet settings

use cellgrid_core::GridBounds;
use cellgrid_formula::EvaluationOptions;

/// Settings for a [`Sheet`](crate::Sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetSettings {
    /// Grid dimensions (default 100 rows x 26 columns)
    pub bounds: GridBounds,
    /// Formula evaluation options
    pub evaluation: EvaluationOptions,
    /// Reject writes that do not match a cell's declared type
    ///
    /// Off by default; the presentation layer normally validates input
    /// before writing.
    pub enforce_declared_types: bool,
}

impl SheetSettings {
    /// Settings with custom grid dimensions
    pub fn with_bounds(rows: u32, cols: u32) -> Self {
        Self {
            bounds: GridBounds::new(rows, cols),
            ..Self::default()
        }
    }

    /// Turn declared-type enforcement on or off
    pub fn enforce_declared_types(mut self, enforce: bool) -> Self {
        self.enforce_declared_types = enforce;
        self
    }

    /// Limit how many formula cells a single reference chain may pass through
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.evaluation.max_depth = Some(max_depth);
        self
    }
}
