//! Structure construction: alien factory and missile controller.
//!
//! Each structure has a fixed home column and a life cost. If the ship's
//! left wing is not aligned yet, the evaluator walks it one step in the
//! direction that closes the gap; once aligned it issues the build.

use crate::constants::{
    ALIEN_FACTORY_COLUMN, ALIEN_FACTORY_MIN_LIVES, MISSILE_CONTROLLER_COLUMN,
    MISSILE_CONTROLLER_MIN_LIVES,
};
use crate::snapshot::{Move, Snapshot};

pub fn alien_factory(snapshot: &Snapshot) -> Option<Move> {
    let player = &snapshot.player;
    if player.alien_factory.is_some() || player.lives < ALIEN_FACTORY_MIN_LIVES {
        return None;
    }
    let ship = player.ship.as_ref()?;
    Some(step_or_build(
        ship.left_wing(),
        ALIEN_FACTORY_COLUMN,
        Move::BuildAlienFactory,
    ))
}

pub fn missile_controller(snapshot: &Snapshot) -> Option<Move> {
    let player = &snapshot.player;
    if player.missile_controller.is_some() || player.lives < MISSILE_CONTROLLER_MIN_LIVES {
        return None;
    }
    let ship = player.ship.as_ref()?;
    Some(step_or_build(
        ship.left_wing(),
        MISSILE_CONTROLLER_COLUMN,
        Move::BuildMissileController,
    ))
}

fn step_or_build(left_wing: i32, target_column: i32, build: Move) -> Move {
    if left_wing == target_column {
        build
    } else if left_wing > target_column {
        Move::MoveLeft
    } else {
        Move::MoveRight
    }
}
