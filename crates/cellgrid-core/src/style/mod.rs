//! Cell formatting types
//!
//! Formats are opaque to the formula evaluator. A cell without a format
//! renders with [`CellFormat::default`].

mod alignment;
mod color;

pub use alignment::HorizontalAlignment;
pub use color::Color;

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Style attributes of a single cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormat {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Font size in points
    pub font_size: f64,
    /// Font color
    pub color: Color,
    /// Horizontal alignment
    pub alignment: HorizontalAlignment,
}

/// Format used for cells that carry none
pub static DEFAULT_FORMAT: CellFormat = CellFormat {
    bold: false,
    italic: false,
    underline: false,
    font_size: DEFAULT_FONT_SIZE,
    color: Color::Auto,
    alignment: HorizontalAlignment::Left,
};

impl Default for CellFormat {
    fn default() -> Self {
        DEFAULT_FORMAT.clone()
    }
}

impl CellFormat {
    /// Create a new default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set font size in points
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set font color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set horizontal alignment
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Check if this is the default format
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
