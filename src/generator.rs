use hashbrown::HashSet;

use crate::grid::Grid;
use crate::placer::{place_words, PlacementMap};
use crate::rng::rng_for_attempt;
use crate::scanner::contains_forbidden;

/// Default cap on regenerate-until-clean attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A generated grid that passed the denylist scan.
#[derive(Debug, Clone)]
pub struct CleanPuzzle {
    pub grid: Grid,
    pub placements: PlacementMap,
    pub unplaced: Vec<String>,
    /// 1-based attempt number that produced the clean grid.
    pub attempts: usize,
    pub seed: u64,
}

/// Regenerate from a fresh empty grid until the scanner passes, up to
/// `max_attempts`. Each attempt draws its own RNG from `(seed, attempt)`,
/// so a (seed, word list, side) triple always replays the same outcome.
///
/// A rejected grid is discarded wholesale; nothing carries over between
/// attempts. Exhausting the cap is an error naming the budget, since an
/// unsatisfiable denylist (e.g. a single letter on a 1x1 grid) would
/// otherwise loop forever.
pub fn generate_clean(
    words: &[String],
    denylist: &HashSet<String>,
    side: usize,
    seed: u64,
    max_attempts: usize,
) -> Result<CleanPuzzle, String> {
    if side == 0 || side > 256 {
        return Err(format!("grid side {side} out of supported range 1..=256"));
    }

    for attempt in 0..max_attempts {
        let mut rng = rng_for_attempt(seed, attempt as u64);
        let placed = place_words(words, side, &mut rng);
        if contains_forbidden(&placed.grid, denylist) {
            continue;
        }
        return Ok(CleanPuzzle {
            grid: placed.grid,
            placements: placed.placements,
            unplaced: placed.unplaced,
            attempts: attempt + 1,
            seed,
        });
    }

    Err(format!(
        "no clean grid within {max_attempts} attempts (seed {seed:#018x})"
    ))
}
