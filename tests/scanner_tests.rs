use hashbrown::HashSet;
use wordgrid::{contains_forbidden, extract_lines, Grid};

fn grid_of(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).expect("valid grid rows")
}

fn denylist(terms: &[&str]) -> HashSet<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}

#[test]
fn hits_term_as_full_row_forward() {
    let grid = grid_of(&["EVIL", "AAAA", "BBBB", "CCCC"]);
    assert!(contains_forbidden(&grid, &denylist(&["EVIL"])));
}

#[test]
fn hits_term_as_full_row_reversed() {
    let grid = grid_of(&["LIVE", "AAAA", "BBBB", "CCCC"]);
    assert!(
        contains_forbidden(&grid, &denylist(&["EVIL"])),
        "rows must also be read right-to-left"
    );
}

#[test]
fn hits_term_as_full_column() {
    let grid = grid_of(&["EAAA", "VAAA", "IAAA", "LAAA"]);
    assert!(contains_forbidden(&grid, &denylist(&["EVIL"])));
}

#[test]
fn hits_term_as_full_column_reversed() {
    let grid = grid_of(&["LAAA", "IAAA", "VAAA", "EAAA"]);
    assert!(
        contains_forbidden(&grid, &denylist(&["EVIL"])),
        "columns must also be read bottom-to-top"
    );
}

#[test]
fn hits_term_on_down_right_diagonal() {
    let grid = grid_of(&["EXXX", "XVXX", "XXIX", "XXXL"]);
    assert!(contains_forbidden(&grid, &denylist(&["EVIL"])));
}

#[test]
fn hits_term_on_short_off_main_diagonal() {
    // (0,1) and (1,2) form the length-2 diagonal above the main one.
    let grid = grid_of(&["XEX", "XXV", "XXX"]);
    assert!(contains_forbidden(&grid, &denylist(&["EV"])));
    assert!(
        contains_forbidden(&grid, &denylist(&["VE"])),
        "diagonal reverse reading must be covered"
    );
}

#[test]
fn anti_diagonal_is_not_scanned() {
    // BAD lies only along the slope -1 diagonal (0,2),(1,1),(2,0).
    let grid = grid_of(&["XXB", "XAX", "DXX"]);
    assert!(
        !contains_forbidden(&grid, &denylist(&["BAD", "DAB"])),
        "anti-diagonals are intentionally outside the candidate set"
    );
}

#[test]
fn term_shorter_than_a_line_is_not_a_hit() {
    let grid = grid_of(&["CATQQ", "QQQQQ", "QQQQQ", "QQQQQ", "QQQQQ"]);
    assert!(
        !contains_forbidden(&grid, &denylist(&["CAT"])),
        "membership is exact full-line equality, not substring search"
    );
    assert!(contains_forbidden(&grid, &denylist(&["CATQQ"])));
}

#[test]
fn extracted_line_count_for_distinct_letters() {
    let grid = grid_of(&["ABCD", "EFGH", "IJKL", "MNOP"]);
    let lines = extract_lines(&grid);
    // 4 rows + 4 cols + 7 diagonals, each in two directions, minus the two
    // single-letter corner diagonals whose reverse is themselves.
    assert_eq!(lines.len(), 28);
    assert!(lines.contains("ABCD"));
    assert!(lines.contains("DCBA"));
    assert!(lines.contains("AEIM"));
    assert!(lines.contains("AFKP"));
    assert!(lines.contains("PKFA"));
    assert!(lines.contains("M"), "corner cells are length-1 diagonals");
}

#[test]
fn scanner_is_pure_and_idempotent() {
    let grid = grid_of(&["EVIL", "AAAA", "BBBB", "CCCC"]);
    let before = grid.clone();
    let terms = denylist(&["EVIL"]);

    let first = contains_forbidden(&grid, &terms);
    let second = contains_forbidden(&grid, &terms);
    assert_eq!(first, second, "same grid, same verdict");
    assert_eq!(grid, before, "scanning must not mutate the grid");
    assert_eq!(extract_lines(&grid), extract_lines(&grid));
}

#[test]
fn empty_denylist_never_hits() {
    let grid = grid_of(&["ABCD", "EFGH", "IJKL", "MNOP"]);
    assert!(!contains_forbidden(&grid, &HashSet::new()));
}
