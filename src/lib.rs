#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod grid;
pub mod placer;
pub mod scanner;
pub mod generator;
pub mod rng;
pub mod wordlist;
pub mod persist;
pub mod overlay;

// Re-exports: stable minimal API surface for external callers
pub use crate::generator::{generate_clean, CleanPuzzle, DEFAULT_MAX_ATTEMPTS};
pub use crate::grid::Grid;
pub use crate::placer::{place_words, PlacedGrid, PlacementMap, PLACE_ATTEMPTS};
pub use crate::rng::rng_for_attempt;
pub use crate::scanner::{contains_forbidden, extract_lines};
pub use crate::types::Direction;
pub use crate::wordlist::{load_denylist_from_txt, load_words_from_txt};
