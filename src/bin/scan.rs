use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wordgrid::{contains_forbidden, load_denylist_from_txt, Grid};

#[derive(Debug, Parser)]
#[command(name = "scan", about = "Denylist audit for an existing word-search grid")]
struct Args {
    /// Grid text file: one row of letters per line
    #[arg(long)]
    grid: PathBuf,

    /// Denylist file, one forbidden term per line
    #[arg(long)]
    denylist: PathBuf,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.grid)
        .map_err(|e| format!("failed to read grid {}: {e}", args.grid.display()))?;
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let grid = Grid::from_rows(&rows)?;
    let denylist = load_denylist_from_txt(&args.denylist)?;

    if contains_forbidden(&grid, &denylist) {
        println!("[scan] forbidden line detected");
        Ok(ExitCode::from(2))
    } else {
        println!("[scan] clean");
        Ok(ExitCode::SUCCESS)
    }
}
