//! Cell tokens and the per-line notation scanner.
//!
//! One line of board notation is a run-length encoding of a row of cells: a
//! digit `d` stands for `d` blank cells, an underscore for one occupied cell,
//! and a vertical bar closes a column boundary without adding width. The
//! scanner expands that encoding into an explicit [`Row`] of fixed-width
//! [`Cell`] tokens so that rendering never has to re-edit a partially built
//! string.

#[cfg(test)]
#[path = "row_test.rs"]
mod row_test;

use crate::doc::Diagnostic;

/// A two-character rendering unit in a board row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Empty space inside the board.
    Blank,
    /// An occupied square, drawn with an underscore.
    Occupied,
}

impl Cell {
    /// The character drawn in the cell's first column.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Occupied => '_',
        }
    }
}

/// One scanned board row: an ordered cell list plus column-boundary flags.
///
/// The raw source text is kept alongside the cells so diagnostics can quote
/// the offending line verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    source: String,
    cells: Vec<Cell>,
    boundaries: Vec<bool>,
}

impl Row {
    /// Expand one line of notation into a row.
    ///
    /// Returns the row together with any diagnostics raised while scanning.
    /// Unrecognized characters are reported and skipped; they contribute
    /// neither width nor cells.
    #[must_use]
    pub fn scan(source: &str) -> (Self, Vec<Diagnostic>) {
        let mut row = Self {
            source: source.to_owned(),
            cells: Vec::new(),
            boundaries: Vec::new(),
        };
        let mut diagnostics = Vec::new();

        for ch in source.chars() {
            match ch {
                '_' => row.push(Cell::Occupied),
                '|' => row.close_boundary(),
                _ => {
                    if let Some(d) = ch.to_digit(10) {
                        for _ in 0..d {
                            row.push(Cell::Blank);
                        }
                    } else {
                        diagnostics.push(Diagnostic::UnknownChar {
                            row: source.to_owned(),
                            ch,
                        });
                    }
                }
            }
        }

        (row, diagnostics)
    }

    fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
        self.boundaries.push(false);
    }

    /// Mark the most recent cell as closing a column boundary.
    ///
    /// A bar before any cell merges into the leading border, and a repeated
    /// bar re-marks the same cell, so both are no-ops.
    fn close_boundary(&mut self) {
        if let Some(flag) = self.boundaries.last_mut() {
            *flag = true;
        }
    }

    /// The raw notation this row was scanned from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Expanded cell count; the value checked against the board width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// The expanded cells, left to right.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether the cell at `index` closes a column boundary.
    ///
    /// The last cell of a row always does: the right border sits there.
    #[must_use]
    pub fn is_boundary(&self, index: usize) -> bool {
        index + 1 == self.cells.len() || self.boundaries.get(index).copied().unwrap_or(false)
    }
}
