//! Player: one board plus bookkeeping, and the move-then-attack turn
//! contract.

use rand::Rng;

use crate::board::Board;
use crate::bomb::Bomb;
use crate::common::{AttackOutcome, GameError};
use crate::coord::Target;
use crate::display;

/// Caller-visible narration of one attack. Rendering the wording is the
/// front end's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackEvent {
    /// The bomb fell on open water.
    Missed,
    /// The bomb fell on a cell that had already been damaged.
    Rehit,
    /// The bomb damaged a ship.
    Hit {
        symbol: char,
        color: u8,
        destroyed: bool,
    },
}

pub struct Player {
    name: String,
    board: Board,
    ships_left: usize,
    time_elapsed: u64,
}

impl Player {
    /// Wrap a board. An empty name falls back to `"Player"`.
    pub fn new(name: &str, board: Board) -> Self {
        let name = if name.is_empty() { "Player" } else { name }.to_string();
        let ships_left = board.ships_left();
        Player {
            name,
            board,
            ships_left,
            time_elapsed: 0,
        }
    }

    /// Build a bomb from a two-character target string (row letter, column
    /// letter), normalizing case before coordinate extraction.
    pub fn get_bomb(&self, target: &str) -> Result<Bomb, GameError> {
        let mut chars = target.chars();
        let (row, col) = match (chars.next(), chars.next(), chars.next()) {
            (Some(row), Some(col), None) => (row.to_ascii_uppercase(), col.to_ascii_lowercase()),
            _ => return Err(GameError::InvalidCoordinate),
        };
        Bomb::new(
            Target::new(row, col),
            self.board.num_lines(),
            self.board.num_columns(),
        )
    }

    /// One full turn against this fleet: every surviving ship is repositioned
    /// before the bomb resolves, so the board the bomb lands on is never the
    /// one last displayed. Refreshes the cached ships-left count.
    pub fn attack_board<R: Rng>(&mut self, rng: &mut R, bomb: &Bomb) -> AttackEvent {
        self.board.move_ships(rng);
        let event = match self.board.attack(bomb) {
            AttackOutcome::Miss => AttackEvent::Missed,
            AttackOutcome::Rehit => AttackEvent::Rehit,
            AttackOutcome::Hit(index) => {
                let ship = self.board.ship(index);
                AttackEvent::Hit {
                    symbol: ship.symbol(),
                    color: ship.color(),
                    destroyed: ship.is_destroyed(),
                }
            }
        };
        self.ships_left = self.board.ships_left();
        event
    }

    /// True once the cached ships-left count reaches zero.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.ships_left == 0
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ships_left(&self) -> usize {
        self.ships_left
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cumulative turn time in seconds, updated by the turn loop.
    pub fn time_elapsed(&self) -> u64 {
        self.time_elapsed
    }

    pub fn add_time_elapsed(&mut self, secs: u64) {
        self.time_elapsed += secs;
    }

    /// Render this player's board through the display module.
    pub fn show_board(&self, reveal: bool) -> String {
        display::render(&self.board, reveal)
    }
}
