//! Record framing: turn a notation file into a [`Board`].
//!
//! The file has two sections. Before the first empty line, each line is a
//! comma-delimited record whose first field is one row of board notation.
//! After it, lines hold whitespace-separated clue values (per-column counts
//! first, then per-row counts). The clue section is optional; the original
//! format simply ends at the blank line.

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::doc::Board;

/// Error returned by [`read_board`] and [`read_board_file`].
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The input could not be read at all.
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),
    /// A clue-section token is not a non-negative integer.
    #[error("invalid clue value {token:?} on line {line}")]
    BadClue {
        /// The token that failed to parse.
        token: String,
        /// 1-based line number in the input.
        line: usize,
    },
}

/// Read a board from any buffered reader.
///
/// # Errors
///
/// Returns [`ReadError::Io`] if reading fails, or [`ReadError::BadClue`] if
/// a clue-section token does not parse. Notation problems are never errors —
/// they surface as diagnostics on the returned board.
pub fn read_board<R: BufRead>(input: R) -> Result<Board, ReadError> {
    let mut raw_rows: Vec<String> = Vec::new();
    let mut clue_values: Vec<usize> = Vec::new();
    let mut in_clues = false;

    for (index, line) in input.lines().enumerate() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }

        if !in_clues {
            if line.is_empty() {
                in_clues = true;
                continue;
            }
            let field = line.split(',').next().unwrap_or("");
            raw_rows.push(field.to_owned());
        } else {
            for token in line.split_whitespace() {
                let value = token.parse::<usize>().map_err(|_| ReadError::BadClue {
                    token: token.to_owned(),
                    line: index + 1,
                })?;
                clue_values.push(value);
            }
        }
    }

    let mut board = Board::from_rows(raw_rows);
    if !clue_values.is_empty() {
        board.attach_clues(clue_values);
    }
    Ok(board)
}

/// Open `path` and read a board from it.
///
/// The file handle is scoped to this call and closed on every exit path.
///
/// # Errors
///
/// Same conditions as [`read_board`], plus [`ReadError::Io`] when the file
/// cannot be opened.
pub fn read_board_file(path: &Path) -> Result<Board, ReadError> {
    let file = File::open(path)?;
    read_board(BufReader::new(file))
}
