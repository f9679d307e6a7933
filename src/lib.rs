//! Core simulation of a turn-based grid naval combat game in which the fleet
//! repositions itself randomly before every incoming attack.

mod board;
mod bomb;
mod common;
mod coord;
mod display;
mod layout;
mod logging;
mod player;
mod ship;

pub use board::*;
pub use bomb::*;
pub use common::*;
pub use coord::*;
pub use display::*;
pub use layout::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
