//! Text rendering of a board.

use crate::board::Board;

/// Render the grid with a column-letter header and row-letter prefixes.
/// `reveal` shows ship symbols on their cells; otherwise everything renders
/// as open water, which is all an attacker is entitled to see.
pub fn render(board: &Board, reveal: bool) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for c in 0..board.num_columns() {
        out.push(' ');
        out.push((b'a' + c as u8) as char);
    }
    out.push('\n');

    for r in 0..board.num_lines() {
        out.push((b'A' + r as u8) as char);
        out.push(' ');
        for c in 0..board.num_columns() {
            let glyph = match board.cell(r, c) {
                Some(i) if reveal => board.ship(i).symbol(),
                _ => '.',
            };
            out.push(' ');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
