//! Shared types: the attack-outcome sentinel and game errors.

/// Result of resolving a bomb against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The bomb fell on open water.
    Miss,
    /// The bomb fell on a ship cell that had already been damaged.
    Rehit,
    /// The bomb damaged the ship at this index for the first time.
    Hit(usize),
}

/// Errors returned by coordinate, board and layout operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Target does not name a cell on this board.
    InvalidCoordinate,
    /// Hit offset past the end of a ship's hull.
    OffsetOutOfRange,
    /// Ship footprint would leave the placeable area.
    OutOfBounds,
    /// Ship footprint overlaps another live ship.
    Occupied,
    /// Layout text could not be parsed at the given 1-based line.
    MalformedLayout { line: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidCoordinate => write!(f, "Target is not a cell on this board"),
            GameError::OffsetOutOfRange => write!(f, "Hit offset is past the end of the hull"),
            GameError::OutOfBounds => write!(f, "Ship footprint leaves the placeable area"),
            GameError::Occupied => write!(f, "Ship footprint overlaps another ship"),
            GameError::MalformedLayout { line } => {
                write!(f, "Malformed board layout at line {}", line)
            }
        }
    }
}

impl std::error::Error for GameError {}
