//! Parsing boundary for board-definition text: a dimensions header followed by
//! one whitespace-separated ship record per line.
//!
//! ```text
//! 10 x 10
//! A 4 B b H 9
//! B 3 D f V 12
//! ```
//!
//! Field order per record: symbol, size, row letter, column letter,
//! orientation (`H`/`V`), color. A trailing record that fails to parse is
//! dropped rather than reported, so an exhausted input stream can never
//! corrupt the ships parsed before it; anywhere else a bad field is a
//! [`GameError::MalformedLayout`] carrying the offending line number.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::common::GameError;
use crate::ship::Orientation;

/// Row and column letters are single alphabet characters, so boards are
/// capped at 26 lines and 26 columns.
pub const MAX_DIMENSION: usize = 26;

/// One ship record, as written in the layout file. Position letters are kept
/// in character form; the board converts them when it builds the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRecord {
    pub symbol: char,
    pub size: usize,
    pub row: char,
    pub col: char,
    pub orientation: Orientation,
    pub color: u8,
}

/// Parsed board definition: dimensions plus ship records in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub num_lines: usize,
    pub num_columns: usize,
    pub ships: Vec<ShipRecord>,
}

impl Layout {
    /// Parse layout text. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .peekable();

        let (header_line, header) = lines.next().ok_or(GameError::MalformedLayout { line: 1 })?;
        let (num_lines, num_columns) =
            parse_header(header).ok_or(GameError::MalformedLayout { line: header_line })?;

        let mut ships = Vec::new();
        while let Some((line, record)) = lines.next() {
            match parse_record(record) {
                Some(rec) => ships.push(rec),
                // Tolerate one ragged record at end of input.
                None if lines.peek().is_none() => break,
                None => return Err(GameError::MalformedLayout { line }),
            }
        }

        Ok(Layout {
            num_lines,
            num_columns,
            ships,
        })
    }

    /// Read and parse a layout file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Layout> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading board layout {}", path.display()))?;
        Ok(Layout::parse(&text)?)
    }
}

/// Header shape: `numLines <separator> numColumns`, e.g. `10 x 10`.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let num_lines: usize = fields.next()?.parse().ok()?;
    let _separator = fields.next()?;
    let num_columns: usize = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    if !(1..=MAX_DIMENSION).contains(&num_lines) || !(1..=MAX_DIMENSION).contains(&num_columns) {
        return None;
    }
    Some((num_lines, num_columns))
}

fn parse_record(line: &str) -> Option<ShipRecord> {
    let mut fields = line.split_whitespace();
    let symbol = single_char(fields.next()?)?;
    let size: usize = fields.next()?.parse().ok()?;
    let row = single_char(fields.next()?)?;
    let col = single_char(fields.next()?)?;
    let orientation = match fields.next()? {
        "H" => Orientation::Horizontal,
        "V" => Orientation::Vertical,
        _ => return None,
    };
    let color: u8 = fields.next()?.parse().ok()?;
    if fields.next().is_some() || size == 0 {
        return None;
    }
    Some(ShipRecord {
        symbol,
        size,
        row,
        col,
        orientation,
        color,
    })
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
