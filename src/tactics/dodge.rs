//! Near-field projectile avoidance.
//!
//! Three range tiers, closest danger first. The closest tier never forces a
//! move — a projectile already level with the row above the ship can only be
//! walked into, so it merely vetoes the step that would do so. The middle
//! tier forces a sidestep away from a wing and vetoes steps into flanking
//! fire; the far tier handles a projectile bearing down on the ship's
//! center, where the only tactical constraint is the walls.

use crate::constants::{DODGE_LEFT_WALL_COLUMN, DODGE_RIGHT_WALL_COLUMN};
use crate::query;
use crate::rng::SeededRng;
use crate::snapshot::{Entity, Move, Ship, Snapshot};
use crate::tactics::DisallowedMoves;

pub fn evaluate(
    snapshot: &Snapshot,
    disallowed: &mut DisallowedMoves,
    rng: &mut SeededRng,
) -> Option<Move> {
    let ship = snapshot.player.ship.as_ref()?;
    let projectiles: Vec<Entity> = snapshot
        .enemy
        .missiles
        .iter()
        .chain(snapshot.enemy.bullets.iter())
        .copied()
        .collect();

    veto_immediate_row(ship, &projectiles, disallowed);
    if let Some(forced) = dodge_two_rows_out(ship, &projectiles, disallowed) {
        return Some(forced);
    }
    dodge_three_rows_out(ship, &projectiles, rng)
}

/// One row above the ship: too late to evade, so only forbid stepping
/// sideways into the projectile.
fn veto_immediate_row(ship: &Ship, projectiles: &[Entity], disallowed: &mut DisallowedMoves) {
    let row = ship.row - 1;
    if query::any_at(projectiles, ship.left_wing() - 1, row) {
        disallowed.forbid(Move::MoveLeft);
    }
    if query::any_at(projectiles, ship.right_wing() + 1, row) {
        disallowed.forbid(Move::MoveRight);
    }
}

/// Two rows above: a projectile over a wing forces an immediate sidestep
/// the other way; one column further out forbids stepping under it.
fn dodge_two_rows_out(
    ship: &Ship,
    projectiles: &[Entity],
    disallowed: &mut DisallowedMoves,
) -> Option<Move> {
    let row = ship.row - 2;
    if query::any_at(projectiles, ship.left_wing(), row) {
        return Some(Move::MoveRight);
    }
    if query::any_at(projectiles, ship.right_wing(), row) {
        return Some(Move::MoveLeft);
    }
    if query::any_at(projectiles, ship.left_wing() - 1, row) {
        disallowed.forbid(Move::MoveLeft);
    }
    if query::any_at(projectiles, ship.right_wing() + 1, row) {
        disallowed.forbid(Move::MoveRight);
    }
    None
}

/// Three rows above the center column: near a wall the ship cannot fit
/// past on that side, so the direction is forced; mid-field either way
/// clears it, decided by the injected coin flip.
fn dodge_three_rows_out(
    ship: &Ship,
    projectiles: &[Entity],
    rng: &mut SeededRng,
) -> Option<Move> {
    if !query::any_at(projectiles, ship.center(), ship.row - 3) {
        return None;
    }
    if ship.center() < DODGE_LEFT_WALL_COLUMN {
        return Some(Move::MoveRight);
    }
    if ship.center() > DODGE_RIGHT_WALL_COLUMN {
        return Some(Move::MoveLeft);
    }
    if rng.next() & 1 == 0 {
        Some(Move::MoveLeft)
    } else {
        Some(Move::MoveRight)
    }
}
