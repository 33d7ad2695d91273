//! The board document: scanned rows, the recorded width, diagnostics, clues.
//!
//! A [`Board`] is built in one pass over the raw row strings. Inconsistencies
//! never abort the build — they accumulate as [`Diagnostic`] values so the
//! caller can report them and still print the board.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::Serialize;

use crate::row::Row;

/// A non-fatal problem found while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A row expanded to a different width than the board's recorded width.
    WidthMismatch {
        /// Raw notation of the offending row.
        row: String,
        /// Width the row expanded to.
        found: usize,
        /// Width recorded from the first non-empty row.
        expected: usize,
    },
    /// A character that is not a digit, underscore, or bar.
    UnknownChar {
        /// Raw notation of the offending row.
        row: String,
        /// The unrecognized character.
        ch: char,
    },
    /// The clue section holds the wrong number of values for the board.
    ClueCountMismatch {
        /// Board width plus row count.
        expected: usize,
        /// Values actually present.
        found: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthMismatch { row, found, expected } => {
                write!(f, "row {row:?} expands to width {found}, expected {expected}")
            }
            Self::UnknownChar { row, ch } => {
                write!(f, "row {row:?} contains unrecognized character {ch:?}")
            }
            Self::ClueCountMismatch { expected, found } => {
                write!(f, "clue section holds {found} values, expected {expected}")
            }
        }
    }
}

/// Per-column and per-row counts from the file's optional second section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clues {
    /// One count per board column, left to right.
    pub cols: Vec<usize>,
    /// One count per board row, top to bottom.
    pub rows: Vec<usize>,
}

/// A fully scanned board.
#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Row>,
    width: usize,
    diagnostics: Vec<Diagnostic>,
    clues: Option<Clues>,
}

impl Board {
    /// Build a board from raw row strings, in input order.
    ///
    /// The recorded width stays zero until the first row that expands to any
    /// cells, then every later row is checked against it. A differing row
    /// gets one [`Diagnostic::WidthMismatch`] and is kept as scanned.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut board = Self {
            rows: Vec::new(),
            width: 0,
            diagnostics: Vec::new(),
            clues: None,
        };

        for raw in rows {
            let (row, mut diagnostics) = Row::scan(raw.as_ref());
            board.diagnostics.append(&mut diagnostics);

            if board.width == 0 {
                board.width = row.width();
            } else if row.width() != board.width {
                board.diagnostics.push(Diagnostic::WidthMismatch {
                    row: row.source().to_owned(),
                    found: row.width(),
                    expected: board.width,
                });
            }

            board.rows.push(row);
        }

        board
    }

    /// Attach the clue section, splitting the flat value list into column
    /// counts (first `width` values) and row counts (the rest).
    ///
    /// A list of the wrong total length raises a
    /// [`Diagnostic::ClueCountMismatch`] and leaves the board without clues.
    pub fn attach_clues(&mut self, values: Vec<usize>) {
        let expected = self.width + self.rows.len();
        if values.len() != expected {
            self.diagnostics.push(Diagnostic::ClueCountMismatch {
                expected,
                found: values.len(),
            });
            return;
        }
        let (cols, rows) = values.split_at(self.width);
        self.clues = Some(Clues {
            cols: cols.to_vec(),
            rows: rows.to_vec(),
        });
    }

    /// The scanned rows, in input order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Width recorded from the first row that expanded to any cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Every diagnostic raised while scanning and attaching clues.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The clue section, when the file carried a valid one.
    #[must_use]
    pub fn clues(&self) -> Option<&Clues> {
        self.clues.as_ref()
    }
}
