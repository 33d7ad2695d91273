use super::*;

fn scan(source: &str) -> Row {
    Row::scan(source).0
}

// =============================================================
// Expansion
// =============================================================

#[test]
fn digit_expands_to_blank_cells() {
    let row = scan("3");
    assert_eq!(row.width(), 3);
    assert!(row.cells().iter().all(|c| *c == Cell::Blank));
}

#[test]
fn underscore_is_one_occupied_cell() {
    let row = scan("_");
    assert_eq!(row.cells(), &[Cell::Occupied]);
    assert_eq!(row.width(), 1);
}

#[test]
fn zero_digit_adds_nothing() {
    let row = scan("0");
    assert_eq!(row.width(), 0);
    assert!(row.cells().is_empty());
}

#[test]
fn mixed_notation_interleaves_cells() {
    let row = scan("1_1");
    assert_eq!(row.cells(), &[Cell::Blank, Cell::Occupied, Cell::Blank]);
    assert_eq!(row.width(), 3);
}

#[test]
fn empty_source_scans_to_empty_row() {
    let row = scan("");
    assert_eq!(row.width(), 0);
    assert!(row.cells().is_empty());
}

#[test]
fn source_is_preserved_verbatim() {
    let row = scan("2|_");
    assert_eq!(row.source(), "2|_");
}

// =============================================================
// Column boundaries
// =============================================================

#[test]
fn bar_closes_the_previous_cell() {
    let row = scan("2|1");
    assert!(row.is_boundary(1));
    assert!(!row.is_boundary(0));
    assert_eq!(row.width(), 3);
}

#[test]
fn bar_contributes_no_width() {
    assert_eq!(scan("2|1").width(), scan("21").width());
}

#[test]
fn bar_before_any_cell_is_a_noop() {
    let row = scan("|2");
    assert!(!row.is_boundary(0));
    assert_eq!(row.width(), 2);
}

#[test]
fn repeated_bars_are_idempotent() {
    let once = scan("2|1");
    let twice = scan("2||1");
    assert_eq!(once.width(), twice.width());
    for index in 0..once.width() {
        assert_eq!(once.is_boundary(index), twice.is_boundary(index));
    }
}

#[test]
fn last_cell_is_always_a_boundary() {
    let row = scan("3");
    assert!(row.is_boundary(2));
    assert!(!row.is_boundary(0));
}

// =============================================================
// Unknown characters
// =============================================================

#[test]
fn unknown_char_is_reported_and_skipped() {
    let (row, diagnostics) = Row::scan("2x1");
    assert_eq!(row.width(), 3);
    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnknownChar {
            row: "2x1".to_owned(),
            ch: 'x',
        }]
    );
}

#[test]
fn valid_notation_raises_no_diagnostics() {
    let (_, diagnostics) = Row::scan("1_1|2");
    assert!(diagnostics.is_empty());
}
