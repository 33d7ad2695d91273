//! fsquares command line: read a notation file, print the rendered board.
//!
//! Diagnostics go to stdout ahead of the board, matching the original tool;
//! operational logging goes through `tracing` to stderr so it never mixes
//! into the rendered output.

use std::path::PathBuf;
use std::process::ExitCode;

use board::doc::Board;
use board::{reader, render};
use clap::Parser;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to load board: {0}")]
    Read(#[from] reader::ReadError),
    #[error("failed to encode JSON summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fsquares", about = "Render fsquares board notation as ASCII art")]
struct Cli {
    /// Board notation file.
    #[arg(short, long, env = "FSQUARES_BOARD_FILE", default_value = "board.txt")]
    file: PathBuf,

    /// Emit a JSON summary instead of the rendered board.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fsquares failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let board = reader::read_board_file(&cli.file)?;
    tracing::info!(
        file = %cli.file.display(),
        rows = board.rows().len(),
        width = board.width(),
        diagnostics = board.diagnostics().len(),
        "board loaded"
    );

    if cli.json {
        println!("{}", json_summary(&board)?);
        return Ok(());
    }

    for diag in board.diagnostics() {
        println!("{diag}");
    }
    println!("{}", render::render(&board));
    if let Some(clues) = board.clues() {
        println!("columns: {}", join_counts(&clues.cols));
        println!("rows: {}", join_counts(&clues.rows));
    }
    Ok(())
}

fn json_summary(board: &Board) -> Result<String, serde_json::Error> {
    let value = serde_json::json!({
        "width": board.width(),
        "rows": board.rows().iter().map(render::render_row).collect::<Vec<_>>(),
        "rendered": render::render(board),
        "diagnostics": board.diagnostics(),
        "clues": board.clues(),
    });
    serde_json::to_string_pretty(&value)
}

fn join_counts(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
