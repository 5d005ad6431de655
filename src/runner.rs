//! One-tick orchestration: read the battlefield, decide, write the move.

use crate::rng::SeededRng;
use crate::snapshot::Move;
use crate::{state, tactics};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Run a single tick against the harness output directory: load
/// `state.json`, pick a move, write it to `move.txt`.
pub fn run_tick(output_dir: &Path, seed: u32) -> Result<Move> {
    let started = Instant::now();

    let snapshot = state::load(output_dir)?;
    if let Some(map) = state::load_map(output_dir) {
        debug!("battlefield map:\n{map}");
    }

    let mut rng = SeededRng::new(seed);
    let chosen = tactics::decide(&snapshot, &mut rng).context("snapshot failed validation")?;
    write_move(output_dir, chosen)?;

    info!("move {chosen} selected in {:?}", started.elapsed());
    Ok(chosen)
}

/// Write the chosen move to `<dir>/move.txt`, creating the directory if
/// the harness has not made it yet.
pub fn write_move(output_dir: &Path, chosen: Move) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed creating directory {}", output_dir.display()))?;
    let path = output_dir.join("move.txt");
    fs::write(&path, chosen.as_str())
        .with_context(|| format!("failed writing {}", path.display()))
}
