//! Decision engine for the Space Invaders duel.
//!
//! Each tick the match harness hands the bot a battlefield snapshot and
//! expects exactly one move back. The engine is a prioritized chain of
//! tactical evaluators over an immutable [`snapshot::Snapshot`]; the most
//! involved of them forward-simulates the enemy alien wave to decide
//! whether firing now will score a hit. Evaluation is pure apart from one
//! injectable random tie-break, so a fixed seed reproduces every decision.

pub mod constants;
pub mod query;
pub mod rng;
pub mod runner;
pub mod sim;
pub mod snapshot;
pub mod state;
pub mod tactics;

pub use rng::SeededRng;
pub use snapshot::{Move, Snapshot, SnapshotError};
pub use tactics::decide;
