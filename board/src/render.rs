//! Border and row rendering, final assembly.
//!
//! The renderer reads a finished [`Board`] and produces the printable block:
//! top border, one line per row, bottom border. Rows are joined once into a
//! string sized up front; nothing here mutates document state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::doc::Board;
use crate::row::Row;

/// Repeated unit of the top border.
const TOP_UNIT: &str = "_ ";
/// Repeated unit of the bottom border (overline, U+203E).
const BOTTOM_UNIT: &str = "‾ ";

/// Render one row: a leading border, then one two-character unit per cell.
///
/// A unit's second character is `|` when the cell closes a column boundary
/// (the last cell always does), otherwise padding. A row with no cells is
/// just the single leading border character.
#[must_use]
pub fn render_row(row: &Row) -> String {
    let mut line = String::with_capacity(1 + 2 * row.width());
    line.push('|');
    for (index, cell) in row.cells().iter().enumerate() {
        line.push(cell.glyph());
        line.push(if row.is_boundary(index) { '|' } else { ' ' });
    }
    line
}

/// Assemble the full board block.
///
/// Borders use the board's recorded width, so for an empty board they
/// collapse to a single space each. The result carries no trailing newline;
/// `println!` supplies the final one.
#[must_use]
pub fn render(board: &Board) -> String {
    let width = board.width();
    let mut out = String::new();

    out.push(' ');
    for _ in 0..width {
        out.push_str(TOP_UNIT);
    }
    out.push('\n');

    for row in board.rows() {
        out.push_str(&render_row(row));
        out.push('\n');
    }

    out.push(' ');
    for _ in 0..width {
        out.push_str(BOTTOM_UNIT);
    }

    out
}
