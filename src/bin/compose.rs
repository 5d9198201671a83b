use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use wordgrid::overlay::{compose_overlay, OverlayConfig};
use wordgrid::persist::{save_solution_json, PuzzleDoc};
use wordgrid::{
    generate_clean, load_denylist_from_txt, load_words_from_txt, DEFAULT_MAX_ATTEMPTS,
};

#[derive(Debug, Parser)]
#[command(name = "compose", about = "Word-search puzzle overlay generator")]
struct Args {
    /// Word list file, one word per line
    #[arg(long)]
    words: PathBuf,

    /// Denylist file, one forbidden term per line
    #[arg(long)]
    denylist: PathBuf,

    /// Background image the puzzle is composited onto
    #[arg(long)]
    image: PathBuf,

    /// Output image path (format chosen by extension)
    #[arg(long, default_value = "wordsearch.png")]
    out: PathBuf,

    /// Grid side length
    #[arg(long, default_value_t = 15)]
    grid_size: usize,

    /// Seed for deterministic generation; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on regenerate-until-clean attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Explicit TTF font path (common system bold fonts are probed otherwise)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Optional JSON answer-key output path
    #[arg(long)]
    solution: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let words = load_words_from_txt(&args.words)?;
    let denylist = load_denylist_from_txt(&args.denylist)?;
    println!(
        "[compose] Loaded {} words, {} denylist terms.",
        words.len(),
        denylist.len()
    );

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    println!("[compose] Seed {seed:#018x} (pass --seed to reproduce).");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .map_err(|e| format!("progress template error: {e}"))?,
    );
    spinner.set_message("generating clean grid");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let puzzle = generate_clean(&words, &denylist, args.grid_size, seed, args.max_attempts)?;
    spinner.finish_and_clear();

    println!(
        "[compose] Clean grid after {} attempt(s); {} of {} words placed.",
        puzzle.attempts,
        puzzle.placements.len(),
        words.len()
    );
    if !puzzle.unplaced.is_empty() {
        eprintln!("[compose] Unplaced words: {}", puzzle.unplaced.join(", "));
    }

    let cfg = OverlayConfig {
        font_path: args.font.clone(),
        ..OverlayConfig::default()
    };
    compose_overlay(
        &puzzle.grid,
        &puzzle.placements,
        &words,
        &args.image,
        &args.out,
        &cfg,
    )?;
    println!("[compose] Wrote {}", args.out.display());

    if let Some(solution) = &args.solution {
        save_solution_json(solution, &PuzzleDoc::from_puzzle(&puzzle))?;
        println!("[compose] Wrote answer key {}", solution.display());
    }

    Ok(())
}
