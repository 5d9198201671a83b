use hashbrown::HashSet;

use crate::grid::Grid;

fn insert_line(lines: &mut HashSet<String>, s: String) {
    lines.insert(s.chars().rev().collect());
    lines.insert(s);
}

/// Every full line of the grid as a string, in both reading directions:
/// rows, columns, and the down-right diagonals (`row - col` constant, one
/// per constant in `-(side-1)..=(side-1)`).
///
/// Anti-diagonals (`row + col` constant) are deliberately not walked; the
/// up-right placement axis is only ever caught through the reverse reading
/// of a down-right diagonal when the two coincide.
pub fn extract_lines(grid: &Grid) -> HashSet<String> {
    let side = grid.side();
    let n = side as i32;
    let mut lines = HashSet::new();

    for r in 0..side {
        let row: String = (0..side).map(|c| grid.char_at(r, c)).collect();
        insert_line(&mut lines, row);
    }

    for c in 0..side {
        let col: String = (0..side).map(|r| grid.char_at(r, c)).collect();
        insert_line(&mut lines, col);
    }

    for offset in -(n - 1)..=(n - 1) {
        let mut diag = String::new();
        for r in 0..n {
            let c = r - offset;
            if (0..n).contains(&c) {
                diag.push(grid.char_at(r as usize, c as usize));
            }
        }
        insert_line(&mut lines, diag);
    }

    lines
}

/// True when any denylist term equals one of the grid's extracted lines.
///
/// Membership is exact full-string equality, not substring containment: a
/// term shorter than a line is a hit only on a (short) diagonal of exactly
/// its length. Pure function; the grid is never mutated.
pub fn contains_forbidden(grid: &Grid, denylist: &HashSet<String>) -> bool {
    let lines = extract_lines(grid);
    denylist.iter().any(|term| lines.contains(term))
}
