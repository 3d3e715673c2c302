//! Declared-type validation
//!
//! A cell may carry a [`DeclaredType`] restricting what text the user may
//! enter. The tag only governs input acceptance; formula evaluation ignores
//! it entirely.
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::DeclaredType;
//!
//! assert!(DeclaredType::Number.accepts("3.5"));
//! assert!(!DeclaredType::Number.accepts("three"));
//! assert!(DeclaredType::Date.accepts("2024-02-29"));
//! assert!(!DeclaredType::Date.accepts("2023-02-29"));
//! ```

use chrono::NaiveDate;
use std::fmt;

/// Date layouts accepted for [`DeclaredType::Date`]
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Kind of data a cell accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclaredType {
    /// Any text
    #[default]
    Text,
    /// Numbers only
    Number,
    /// Calendar dates
    Date,
}

impl DeclaredType {
    /// Check whether `text` is acceptable input for this type
    ///
    /// Empty text is always accepted since it clears the cell.
    pub fn accepts(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return true;
        }

        match self {
            DeclaredType::Text => true,
            DeclaredType::Number => text.parse::<f64>().map_or(false, f64::is_finite),
            DeclaredType::Date => parse_date(text).is_some(),
        }
    }
}

/// Parse a date in one of the accepted layouts
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text.trim(), fmt).ok())
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclaredType::Text => "text",
            DeclaredType::Number => "number",
            DeclaredType::Date => "date",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accepts_anything() {
        assert!(DeclaredType::Text.accepts("hello"));
        assert!(DeclaredType::Text.accepts("=SUM(A1,A2)"));
    }

    #[test]
    fn test_number() {
        assert!(DeclaredType::Number.accepts("42"));
        assert!(DeclaredType::Number.accepts(" -1.5e3 "));
        assert!(!DeclaredType::Number.accepts("12abc"));
        assert!(!DeclaredType::Number.accepts("NaN"));
        assert!(!DeclaredType::Number.accepts("inf"));
    }

    #[test]
    fn test_date() {
        assert!(DeclaredType::Date.accepts("2024-01-31"));
        assert!(DeclaredType::Date.accepts("1/31/2024"));
        assert!(DeclaredType::Date.accepts("01/31/2024"));
        assert!(!DeclaredType::Date.accepts("2024-13-01"));
        assert!(!DeclaredType::Date.accepts("yesterday"));
        assert_eq!(
            parse_date("2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn test_empty_always_accepted() {
        assert!(DeclaredType::Number.accepts(""));
        assert!(DeclaredType::Date.accepts("   "));
    }
}
