//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AA27")
///
/// Coordinates are 0-based internally; the textual form uses bijective
/// base-26 column letters and a 1-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., Z=25, AA=26)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Create an address from signed coordinates
    ///
    /// Fails with [`Error::InvalidAddress`] when either coordinate is negative
    /// or does not fit the address space.
    pub fn try_new(row: i64, col: i64) -> Result<Self> {
        if row < 0 || col < 0 {
            return Err(Error::InvalidAddress(format!(
                "negative coordinates ({}, {})",
                row, col
            )));
        }
        let row = u32::try_from(row)
            .map_err(|_| Error::InvalidAddress(format!("row {} too large", row)))?;
        let col = u32::try_from(col)
            .map_err(|_| Error::InvalidAddress(format!("column {} too large", col)))?;
        Ok(Self { row, col })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// Column letters must be uppercase `A`-`Z` and the row number must be a
    /// positive integer.
    ///
    /// # Examples
    /// ```
    /// use cellgrid_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!((addr.row, addr.col), (0, 0));
    ///
    /// let addr = CellAddress::parse("AA3").unwrap();
    /// assert_eq!((addr.row, addr.col), (2, 26));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        let col = letters_to_column(letters)?;

        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in text
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = column_to_letters(self.col);
        result.push_str(&(u64::from(self.row) + 1).to_string());
        result
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = u64::from(col) + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
///
/// Each letter contributes `value * 26^position` with `A` = 1 through `Z` = 26
/// (bijective base-26), and the sum is shifted to 0-based.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c as u64 - 'A' as u64 + 1);
        if col > u64::from(u32::MAX) {
            return Err(Error::InvalidAddress(format!(
                "column '{}' too large",
                letters
            )));
        }
    }

    Ok((col - 1) as u32)
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
///
/// Always normalized so `start` is the top-left and `end` the bottom-right
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range from two corners given in any order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Decode two address texts into their bounding rectangle
    ///
    /// An absent second address yields a 1x1 range.
    ///
    /// ```
    /// use cellgrid_core::{CellAddress, CellRange};
    ///
    /// let range = CellRange::normalize("C3", Some("A1")).unwrap();
    /// assert_eq!(range.start, CellAddress::new(0, 0));
    /// assert_eq!(range.end, CellAddress::new(2, 2));
    /// ```
    pub fn normalize(a: &str, b: Option<&str>) -> Result<Self> {
        let start = CellAddress::parse(a)?;
        match b {
            Some(b) => Ok(Self::new(start, CellAddress::parse(b)?)),
            None => Ok(Self::single(start)),
        }
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((a, b)) if !a.is_empty() && !b.is_empty() => Self::normalize(a, Some(b)),
            Some(_) => Err(Error::InvalidRange(format!("incomplete range '{}'", s))),
            None => Self::normalize(s, None),
        }
    }

    /// Smallest row index
    pub fn min_row(&self) -> u32 {
        self.start.row
    }

    /// Largest row index
    pub fn max_row(&self) -> u32 {
        self.end.row
    }

    /// Smallest column index
    pub fn min_col(&self) -> u32 {
        self.start.col
    }

    /// Largest column index
    pub fn max_col(&self) -> u32 {
        self.end.col
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_count()) * u64::from(self.col_count())
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            remaining: self.cell_count(),
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range, in row-major order
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);
        self.remaining -= 1;

        if self.current_col == self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row = self.current_row.saturating_add(1);
        } else {
            self.current_col += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}
