//! The bomb: an immutable attack target, translated into grid coordinates at
//! construction time.

use crate::common::GameError;
use crate::coord::Target;

/// An attack target fixed at construction against a board's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    target: Target,
    cell: (usize, usize),
}

impl Bomb {
    /// Translate `target` into the integer coordinate space bounded by the
    /// board's dimensions. Targets naming a cell outside the grid are
    /// rejected; a bomb built from in-game input never fails.
    pub fn new(target: Target, num_lines: usize, num_columns: usize) -> Result<Self, GameError> {
        match target.to_cell() {
            Some((row, col)) if row < num_lines && col < num_columns => {
                Ok(Bomb { target, cell: (row, col) })
            }
            _ => Err(GameError::InvalidCoordinate),
        }
    }

    /// The letter-pair target as typed.
    pub fn target(&self) -> Target {
        self.target
    }

    /// The translated `(row, col)` cell.
    pub fn cell(&self) -> (usize, usize) {
        self.cell
    }
}
