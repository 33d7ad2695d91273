//! Board notation parsing and ASCII rendering for fsquares puzzles.
//!
//! This crate owns everything between the raw notation file and the final
//! printable string: expanding the compact digit/underscore/bar notation into
//! an explicit cell model, checking row-width consistency, attaching the
//! optional clue section, and assembling the bordered text block. It performs
//! no I/O beyond [`reader`] and never prints — callers decide what to do with
//! the rendered string and the accumulated diagnostics.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`row`] | Cell tokens and the per-line notation scanner |
//! | [`doc`] | The [`doc::Board`] document, diagnostics, and clues |
//! | [`render`] | Border and row rendering, final assembly |
//! | [`reader`] | Record framing from files or any `BufRead` |

pub mod doc;
pub mod reader;
pub mod render;
pub mod row;
