//! Ship geometry and damage state.

use rand::Rng;

use crate::common::GameError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Per-cell step along the ship's axis, as `(d_row, d_col)`.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship: identity symbol, origin cell, orientation, hull size and per-cell
/// damage. Occupies `size` contiguous cells from the origin along its axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    symbol: char,
    row: usize,
    col: usize,
    orientation: Orientation,
    size: usize,
    color: u8,
    hits: Vec<bool>,
}

impl Ship {
    pub fn new(
        symbol: char,
        row: usize,
        col: usize,
        orientation: Orientation,
        size: usize,
        color: u8,
    ) -> Self {
        Ship {
            symbol,
            row,
            col,
            orientation,
            size,
            color,
            hits: vec![false; size],
        }
    }

    /// Identity symbol shown on the board.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Hull size in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Display color. Has no effect on game logic.
    pub fn color(&self) -> u8 {
        self.color
    }

    /// Origin cell of the footprint as `(row, col)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Restore a previous origin after a failed relocation.
    pub fn set_origin(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    /// Restore a previous orientation after a failed relocation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Iterator over the footprint cells, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (d_row, d_col) = self.orientation.delta();
        let (row, col) = (self.row, self.col);
        (0..self.size).map(move |i| (row + d_row * i, col + d_col * i))
    }

    /// In-ship offset of `cell` along the axis, if the footprint covers it.
    pub fn offset_of(&self, cell: (usize, usize)) -> Option<usize> {
        self.cells().position(|c| c == cell)
    }

    /// Register a hit at `offset`. `Ok(true)` if the cell was freshly damaged,
    /// `Ok(false)` if it had already been hit.
    pub fn attack(&mut self, offset: usize) -> Result<bool, GameError> {
        match self.hits.get_mut(offset) {
            None => Err(GameError::OffsetOutOfRange),
            Some(hit) if *hit => Ok(false),
            Some(hit) => {
                *hit = true;
                Ok(true)
            }
        }
    }

    /// True once every hull cell has been hit. Destroyed ships stay in the
    /// fleet; destruction is a logical state, not removal.
    pub fn is_destroyed(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Draw a uniformly random origin (inclusive bounds) and orientation and
    /// apply them, without any collision check. Returns whether a candidate
    /// was generated; a candidate that later fails the board's placement
    /// check is abandoned by the caller rather than redrawn here.
    pub fn move_random<R: Rng>(
        &mut self,
        rng: &mut R,
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    ) -> bool {
        self.row = rng.random_range(min_row..=max_row);
        self.col = rng.random_range(min_col..=max_col);
        self.orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        true
    }
}
