use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::CleanPuzzle;
use crate::placer::PlacementMap;

pub const FORMAT_VERSION: u32 = 1;

/// Answer-key document written alongside the rendered puzzle image.
/// JSON on purpose: the artifact is meant to be read by humans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDoc {
    pub version: u32,
    pub side: usize,
    pub seed: u64,
    /// Grid rows top-to-bottom, one string per row.
    pub rows: Vec<String>,
    pub placements: PlacementMap,
    pub unplaced: Vec<String>,
}

impl PuzzleDoc {
    pub fn from_puzzle(puzzle: &CleanPuzzle) -> Self {
        Self {
            version: FORMAT_VERSION,
            side: puzzle.grid.side(),
            seed: puzzle.seed,
            rows: puzzle.grid.to_rows(),
            placements: puzzle.placements.clone(),
            unplaced: puzzle.unplaced.clone(),
        }
    }
}

pub fn save_solution_json<P: AsRef<Path>>(path: P, doc: &PuzzleDoc) -> Result<(), String> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| format!("solution serialize error: {e}"))?;
    fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))
}

pub fn load_solution_json<P: AsRef<Path>>(path: P) -> Result<PuzzleDoc, String> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let doc: PuzzleDoc =
        serde_json::from_str(&data).map_err(|e| format!("solution parse error: {e}"))?;
    if doc.version != FORMAT_VERSION {
        return Err(format!(
            "unsupported solution version {} (expected {FORMAT_VERSION})",
            doc.version
        ));
    }
    Ok(doc)
}
