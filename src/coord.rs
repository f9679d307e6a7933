//! Grid coordinates: the letter pair typed by the user and the zero-based
//! integer pair used internally. The mapping is pure and bidirectional.

use core::fmt;

/// User-facing coordinate: an uppercase row letter followed by a lowercase
/// column letter, e.g. `Bc` for row 1, column 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub row: char,
    pub col: char,
}

impl Target {
    pub fn new(row: char, col: char) -> Self {
        Target { row, col }
    }

    /// Zero-based `(row, col)`, or `None` when either letter is outside the
    /// alphabet convention.
    pub fn to_cell(self) -> Option<(usize, usize)> {
        if !self.row.is_ascii_uppercase() || !self.col.is_ascii_lowercase() {
            return None;
        }
        Some((
            (self.row as u8 - b'A') as usize,
            (self.col as u8 - b'a') as usize,
        ))
    }

    /// Inverse of [`Target::to_cell`]. Meaningful for indices below 26.
    pub fn from_cell(row: usize, col: usize) -> Self {
        Target {
            row: (b'A' + row as u8) as char,
            col: (b'a' + col as u8) as char,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}
