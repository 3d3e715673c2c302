//! Cell record

use crate::style::{CellFormat, DEFAULT_FORMAT};
use crate::validation::DeclaredType;

/// Complete data for a single cell
///
/// `raw_value` is the text exactly as entered. A record with an empty raw
/// value is never stored.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellData {
    /// Text as entered, possibly a formula starting with `=`
    pub raw_value: String,
    /// Style attributes, `None` meaning the default format
    pub format: Option<CellFormat>,
    /// Input restriction tag
    pub declared_type: Option<DeclaredType>,
}

impl CellData {
    /// Create a new cell with raw text and no format
    pub fn new<S: Into<String>>(raw_value: S) -> Self {
        Self {
            raw_value: raw_value.into(),
            format: None,
            declared_type: None,
        }
    }

    /// Attach a format
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Attach a declared type
    pub fn with_declared_type(mut self, declared_type: DeclaredType) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    /// Check if the raw value is a formula
    pub fn is_formula(&self) -> bool {
        self.raw_value.starts_with('=')
    }

    /// Check if this cell holds no text
    pub fn is_empty(&self) -> bool {
        self.raw_value.is_empty()
    }

    /// The format to render with, falling back to the defaults
    pub fn effective_format(&self) -> &CellFormat {
        self.format.as_ref().unwrap_or(&DEFAULT_FORMAT)
    }

    /// The declared type, falling back to [`DeclaredType::Text`]
    pub fn effective_declared_type(&self) -> DeclaredType {
        self.declared_type.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cell = CellData::new("12");
        assert!(!cell.is_formula());
        assert_eq!(cell.effective_format(), &CellFormat::default());
        assert_eq!(cell.effective_declared_type(), DeclaredType::Text);

        let cell = CellData::new("=SUM(A1,A2)")
            .with_format(CellFormat::new().with_italic(true))
            .with_declared_type(DeclaredType::Number);
        assert!(cell.is_formula());
        assert!(cell.effective_format().italic);
        assert_eq!(cell.effective_declared_type(), DeclaredType::Number);
    }
}
