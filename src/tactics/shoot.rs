//! Firing decision.
//!
//! Fire only when a missile slot is free, the shot is not wasted on a
//! friendly shield, and the forward simulation says the missile will
//! actually connect with an alien.

use crate::query;
use crate::sim::WaveSimulation;
use crate::snapshot::{Move, Snapshot};

pub fn evaluate(snapshot: &Snapshot) -> Option<Move> {
    let player = &snapshot.player;
    let ship = player.ship.as_ref()?;

    if player.missiles.len() >= player.missile_limit {
        return None;
    }
    // A shield cell anywhere in the firing column blocks the shot outright.
    if query::any_in_column(&player.shields, ship.center()) {
        return None;
    }

    let sim = WaveSimulation::new(
        &snapshot.enemy,
        &player.missiles,
        ship.center(),
        ship.row - 1,
    );
    if sim.predicts_hit() {
        Some(Move::Shoot)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Direction, Entity, Ship, SideState, WaveState};

    fn firing_snapshot() -> Snapshot {
        // Ship center at column 9, row 22; alien drifting right from
        // (1, 13) intercepts the probe on round 8.
        Snapshot {
            player: SideState {
                ship: Some(Ship {
                    id: 1,
                    wings: [8, 9, 10],
                    row: 22,
                }),
                ..SideState::default()
            },
            enemy: SideState {
                aliens: vec![Entity { id: 30, x: 1, y: 13 }],
                wave: WaveState {
                    direction: Direction::Right,
                    wave_size: 3,
                },
                ..SideState::default()
            },
        }
    }

    #[test]
    fn fires_on_predicted_hit() {
        assert_eq!(evaluate(&firing_snapshot()), Some(Move::Shoot));
    }

    #[test]
    fn missile_limit_blocks_the_shot() {
        let mut snapshot = firing_snapshot();
        snapshot.player.missile_limit = 1;
        snapshot.player.missiles.push(Entity { id: 2, x: 5, y: 10 });
        assert_eq!(evaluate(&snapshot), None);
    }

    #[test]
    fn shield_in_firing_column_blocks_the_shot() {
        let mut snapshot = firing_snapshot();
        snapshot.player.shields.push(Entity { id: 3, x: 9, y: 19 });
        assert_eq!(evaluate(&snapshot), None);
    }

    #[test]
    fn shield_in_other_column_does_not_block() {
        let mut snapshot = firing_snapshot();
        snapshot.player.shields.push(Entity { id: 3, x: 8, y: 19 });
        assert_eq!(evaluate(&snapshot), Some(Move::Shoot));
    }

    #[test]
    fn holds_fire_without_a_predicted_hit() {
        let mut snapshot = firing_snapshot();
        snapshot.enemy.aliens.clear();
        assert_eq!(evaluate(&snapshot), None);
    }
}
