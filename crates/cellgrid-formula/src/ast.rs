//! Parsed formula representation

use cellgrid_core::{CellAddress, CellRange};
use std::fmt;

/// A parsed `=NAME(ADDRESS[,ADDRESS])` formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaCall {
    /// Function name, uppercase
    pub name: String,
    /// One or two operand addresses, in source order
    pub operands: Vec<CellAddress>,
}

impl FormulaCall {
    /// Rectangle spanned by the first two operands, if both are present
    pub fn range(&self) -> Option<CellRange> {
        match self.operands.as_slice() {
            [a, b, ..] => Some(CellRange::new(*a, *b)),
            _ => None,
        }
    }

    /// First operand
    pub fn target(&self) -> Option<CellAddress> {
        self.operands.first().copied()
    }
}

impl fmt::Display for FormulaCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}(", self.name)?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", operand)?;
        }
        f.write_str(")")
    }
}
