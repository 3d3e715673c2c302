//! Color representation

use std::fmt;

/// Text color of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb { r, g, b })
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to RGB tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } => (*r, *g, *b),
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { .. } => write!(f, "#{}", self.to_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#FF8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Auto.to_string(), "auto");
        assert_eq!(Color::rgb(1, 2, 255).to_string(), "#0102FF");
    }
}
