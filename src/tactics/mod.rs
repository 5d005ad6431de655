//! Tactical evaluators and the move arbiter.
//!
//! Every evaluator reads the same immutable snapshot and returns
//! `Option<Move>`; the arbiter runs them in fixed priority order and takes
//! the first concrete answer. Dodging also records moves that would walk
//! the ship into a projectile, and those veto whatever the chain picked.

pub mod build;
pub mod dodge;
pub mod shield;
pub mod shoot;
pub mod track;

use crate::rng::SeededRng;
use crate::snapshot::{Move, Snapshot, SnapshotError};

/// Moves vetoed for this tick. Populated once by the dodge evaluator and
/// consulted after the priority chain has picked a move.
#[derive(Debug, Default)]
pub struct DisallowedMoves {
    moves: Vec<Move>,
}

impl DisallowedMoves {
    pub fn forbid(&mut self, mv: Move) {
        if !self.moves.contains(&mv) {
            self.moves.push(mv);
        }
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }
}

/// Pick this tick's move: dodge, then shoot, then the builders, then
/// formation tracking, falling back to `Nothing`. A vetoed pick collapses
/// to `Nothing` rather than walking into fire.
pub fn decide(snapshot: &Snapshot, rng: &mut SeededRng) -> Result<Move, SnapshotError> {
    snapshot.validate()?;

    let mut disallowed = DisallowedMoves::default();
    let chosen = dodge::evaluate(snapshot, &mut disallowed, rng)
        .or_else(|| shoot::evaluate(snapshot))
        .or_else(|| build::alien_factory(snapshot))
        .or_else(|| build::missile_controller(snapshot))
        .or_else(|| shield::evaluate(snapshot))
        .or_else(|| track::evaluate(snapshot))
        .unwrap_or(Move::Nothing);

    if disallowed.contains(chosen) {
        Ok(Move::Nothing)
    } else {
        Ok(chosen)
    }
}
