//! Game board: a grid of ship-index markers over an index-stable ship arena.
//!
//! The grid stores `Option<usize>` indices into the `ships` vector rather
//! than references, so the vector is never reordered or truncated during a
//! game. Destroyed ships stay in the arena; their markers are swept off the
//! grid at the next repositioning pass, after which they are invisible to
//! attacks and to placement checks.

use rand::Rng;

use crate::bomb::Bomb;
use crate::common::{AttackOutcome, GameError};
use crate::coord::Target;
use crate::layout::Layout;
use crate::ship::Ship;

#[derive(Debug)]
pub struct Board {
    num_lines: usize,
    num_columns: usize,
    /// Row-major cell markers; `Some(i)` means ship `i` covers the cell.
    grid: Vec<Option<usize>>,
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board from a parsed layout, placing every ship at its declared
    /// position. A record whose footprint does not fit or collides with an
    /// earlier ship is a construction error.
    pub fn new(layout: &Layout) -> Result<Self, GameError> {
        let mut ships = Vec::with_capacity(layout.ships.len());
        for rec in &layout.ships {
            let (row, col) = Target::new(rec.row, rec.col)
                .to_cell()
                .ok_or(GameError::InvalidCoordinate)?;
            ships.push(Ship::new(
                rec.symbol,
                row,
                col,
                rec.orientation,
                rec.size,
                rec.color,
            ));
        }

        let mut board = Board {
            num_lines: layout.num_lines,
            num_columns: layout.num_columns,
            grid: vec![None; layout.num_lines * layout.num_columns],
            ships,
        };
        for i in 0..board.ships.len() {
            if !board.fits(&board.ships[i]) {
                return Err(GameError::OutOfBounds);
            }
            if !board.place_ship(i) {
                return Err(GameError::Occupied);
            }
        }
        Ok(board)
    }

    pub fn num_lines(&self) -> usize {
        self.num_lines
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// The ship at `index`. Indices are stable for the life of the board.
    pub fn ship(&self, index: usize) -> &Ship {
        &self.ships[index]
    }

    /// All ships in arena order, destroyed ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Marker at `(row, col)`: the occupying ship's index, or `None` for open
    /// water or a cell outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.num_lines && col < self.num_columns {
            self.grid[self.index(row, col)]
        } else {
            None
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.num_columns + col
    }

    /// Bounds part of placement legality. The footprint must stop short of
    /// the last row (vertical) and last column (horizontal): ships never
    /// touch the board's far edge.
    fn fits(&self, ship: &Ship) -> bool {
        if self.num_lines == 0 || self.num_columns == 0 {
            return false;
        }
        let (row, col) = ship.origin();
        let (d_row, d_col) = ship.orientation().delta();
        let end_row = row + d_row * ship.size();
        let end_col = col + d_col * ship.size();
        end_row <= self.num_lines - 1 && end_col <= self.num_columns - 1
    }

    /// Placement legality check, no side effects: the footprint fits and
    /// covers only empty cells.
    pub fn can_place_ship(&self, ship: &Ship) -> bool {
        self.fits(ship) && ship.cells().all(|(r, c)| self.grid[self.index(r, c)].is_none())
    }

    /// Write the ship's footprint onto the grid if the placement is legal.
    /// Wrecks never return to the grid.
    pub fn place_ship(&mut self, ship_index: usize) -> bool {
        if self.ships[ship_index].is_destroyed() {
            return false;
        }
        if !self.can_place_ship(&self.ships[ship_index]) {
            return false;
        }
        let cells: Vec<_> = self.ships[ship_index].cells().collect();
        for (r, c) in cells {
            let i = self.index(r, c);
            self.grid[i] = Some(ship_index);
        }
        true
    }

    /// Erase the ship's markers from its current footprint. Cells that
    /// another ship has since claimed are left alone. No legality check.
    pub fn clear_footprint(&mut self, ship_index: usize) {
        let cells: Vec<_> = self.ships[ship_index].cells().collect();
        for (r, c) in cells {
            let i = self.index(r, c);
            if self.grid[i] == Some(ship_index) {
                self.grid[i] = None;
            }
        }
    }

    /// Try to relocate one ship to a random position and orientation. On any
    /// failure the snapshot is restored and the ship re-placed where it was,
    /// so the grid is consistent whether or not the move applied. Returns
    /// whether the relocation took effect.
    pub fn move_ship<R: Rng>(&mut self, rng: &mut R, ship_index: usize) -> bool {
        let (row, col) = self.ships[ship_index].origin();
        let orientation = self.ships[ship_index].orientation();

        self.clear_footprint(ship_index);

        let drew = self.ships[ship_index].move_random(
            rng,
            0,
            0,
            self.num_lines - 1,
            self.num_columns - 1,
        );
        if drew && self.place_ship(ship_index) {
            log::debug!(
                "ship {} moved to {:?} {:?}",
                ship_index,
                self.ships[ship_index].origin(),
                self.ships[ship_index].orientation(),
            );
            return true;
        }

        self.ships[ship_index].set_origin(row, col);
        self.ships[ship_index].set_orientation(orientation);
        self.place_ship(ship_index);
        false
    }

    /// One repositioning pass in ship-index order: surviving ships each get a
    /// single relocation attempt, wrecks have their markers swept off the
    /// grid.
    pub fn move_ships<R: Rng>(&mut self, rng: &mut R) {
        for i in 0..self.ships.len() {
            if self.ships[i].is_destroyed() {
                self.clear_footprint(i);
            } else {
                self.move_ship(rng, i);
            }
        }
    }

    /// Resolve a bomb against the grid: open water is a miss, a marked cell
    /// is delegated to the occupying ship, which reports whether the cell was
    /// freshly damaged or already hit.
    pub fn attack(&mut self, bomb: &Bomb) -> AttackOutcome {
        let cell = bomb.cell();
        let ship_index = match self.grid[self.index(cell.0, cell.1)] {
            Some(i) => i,
            None => return AttackOutcome::Miss,
        };

        let offset = match self.ships[ship_index].offset_of(cell) {
            Some(offset) => offset,
            // A marker without a matching footprint cell would break the
            // board invariant; treat it as open water.
            None => return AttackOutcome::Miss,
        };

        match self.ships[ship_index].attack(offset) {
            Ok(true) => AttackOutcome::Hit(ship_index),
            Ok(false) => AttackOutcome::Rehit,
            // Unreachable: the offset came from the footprint walk.
            Err(_) => AttackOutcome::Miss,
        }
    }

    /// Number of ships not yet destroyed.
    pub fn ships_left(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// Sum of all hull sizes. Destroyed ships still count; they are never
    /// removed from the arena.
    pub fn ships_area(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }

    pub fn board_area(&self) -> usize {
        self.num_lines * self.num_columns
    }
}
