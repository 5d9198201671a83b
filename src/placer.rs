use hashbrown::HashMap;
use rand::Rng;

use crate::grid::Grid;
use crate::types::{in_bounds, Direction};

/// Ordered (row, col) coordinates per uppercase word, one pair per letter.
pub type PlacementMap = HashMap<String, Vec<(u8, u8)>>;

/// Randomized attempts per word before it is given up on.
pub const PLACE_ATTEMPTS: usize = 100;

/// One placement pass over a fresh grid: the filled grid, the coordinates of
/// every word that landed, and the words that did not.
#[derive(Debug, Clone)]
pub struct PlacedGrid {
    pub grid: Grid,
    pub placements: PlacementMap,
    pub unplaced: Vec<String>,
}

/// Place `words` onto a fresh `side` x `side` grid, then fill the remaining
/// blanks with uniform random letters A-Z.
///
/// Words are upper-cased before placement and keyed that way in the result.
/// A word that cannot be placed within [`PLACE_ATTEMPTS`] tries is recorded
/// in `unplaced` rather than raised as an error; callers must not assume
/// every requested word appears.
pub fn place_words<R: Rng>(words: &[String], side: usize, rng: &mut R) -> PlacedGrid {
    let mut grid = Grid::new(side);
    let mut placements = PlacementMap::new();
    let mut unplaced = Vec::new();

    for word in words {
        let word = word.to_ascii_uppercase();
        match try_place(&mut grid, &word, rng) {
            Some(cells) => {
                placements.insert(word, cells);
            }
            None => unplaced.push(word),
        }
    }

    for r in 0..grid.side() {
        for c in 0..grid.side() {
            if grid.is_blank(r, c) {
                grid.set(r, c, rng.gen_range(b'A'..=b'Z'));
            }
        }
    }

    PlacedGrid {
        grid,
        placements,
        unplaced,
    }
}

/// Up to [`PLACE_ATTEMPTS`] random (direction, start) draws. An attempt is
/// spent whether it fails on bounds or on a letter conflict. A cell may be
/// reused only when it already holds the letter the word needs there.
fn try_place<R: Rng>(grid: &mut Grid, word: &str, rng: &mut R) -> Option<Vec<(u8, u8)>> {
    let side = grid.side() as i32;
    let letters = word.as_bytes();
    let steps = letters.len() as i32 - 1;

    for _ in 0..PLACE_ATTEMPTS {
        let dir = Direction::all()[rng.gen_range(0..4)];
        let (dr, dc) = dir.delta();
        let row = rng.gen_range(0..side);
        let col = rng.gen_range(0..side);

        if !in_bounds(row + dr * steps, col + dc * steps, side) {
            continue;
        }

        let mut cells = Vec::with_capacity(letters.len());
        let mut valid = true;
        for (i, &letter) in letters.iter().enumerate() {
            let r = row + dr * i as i32;
            let c = col + dc * i as i32;
            match grid.get(r as usize, c as usize) {
                Some(existing) if existing != letter => {
                    valid = false;
                    break;
                }
                _ => cells.push((r as u8, c as u8)),
            }
        }
        if !valid {
            continue;
        }

        for (&(r, c), &letter) in cells.iter().zip(letters.iter()) {
            grid.set(r as usize, c as usize, letter);
        }
        return Some(cells);
    }

    None
}
