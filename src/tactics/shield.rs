//! Shield repair.
//!
//! Two shield slots protect the structure columns. Slot health is the
//! number of friendly shield cells left across the slot's three columns
//! (0–9). The left slot is checked first; whichever slot is at or below
//! the tolerance gets the ship walked to its left column and rebuilt.

use crate::constants::{SHIELD_HEALTH_TOLERANCE, SHIELD_SLOTS};
use crate::query;
use crate::snapshot::{Move, Snapshot};

pub fn evaluate(snapshot: &Snapshot) -> Option<Move> {
    let player = &snapshot.player;
    if player.lives <= 0 {
        return None;
    }
    let ship = player.ship.as_ref()?;

    for slot in SHIELD_SLOTS {
        let health: usize = slot
            .iter()
            .map(|&column| query::count_in_column(&player.shields, column))
            .sum();
        if health <= SHIELD_HEALTH_TOLERANCE {
            return Some(walk_to_and_build(ship.left_wing(), slot[0]));
        }
    }
    None
}

fn walk_to_and_build(left_wing: i32, slot_left: i32) -> Move {
    if left_wing < slot_left {
        Move::MoveRight
    } else if left_wing > slot_left {
        Move::MoveLeft
    } else {
        Move::BuildShield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Entity, Ship, SideState};

    fn snapshot(ship_left: i32, lives: i32, shield_cells: &[(i32, i32)]) -> Snapshot {
        Snapshot {
            player: SideState {
                lives,
                ship: Some(Ship {
                    id: 1,
                    wings: [ship_left, ship_left + 1, ship_left + 2],
                    row: 22,
                }),
                shields: shield_cells
                    .iter()
                    .enumerate()
                    .map(|(i, &(x, y))| Entity {
                        id: 40 + i as i32,
                        x,
                        y,
                    })
                    .collect(),
                ..SideState::default()
            },
            enemy: SideState::default(),
        }
    }

    /// Nine cells: a full-health slot.
    fn full_slot(columns: [i32; 3]) -> Vec<(i32, i32)> {
        columns
            .iter()
            .flat_map(|&x| (17..20).map(move |y| (x, y)))
            .collect()
    }

    #[test]
    fn depleted_left_slot_is_repaired_first() {
        // Left slot empty, right slot full: aligned ship rebuilds left.
        let cells = full_slot([14, 15, 16]);
        let snap = snapshot(2, 3, &cells);
        assert_eq!(evaluate(&snap), Some(Move::BuildShield));
    }

    #[test]
    fn walks_toward_the_depleted_slot() {
        let cells = full_slot([2, 3, 4]);
        // Right slot empty; ship at left wing 9 must walk right to 14.
        assert_eq!(evaluate(&snapshot(9, 3, &cells)), Some(Move::MoveRight));
        // From the far right it walks left.
        assert_eq!(evaluate(&snapshot(15, 3, &cells)), Some(Move::MoveLeft));
    }

    #[test]
    fn healthy_slots_need_no_repair() {
        let mut cells = full_slot([2, 3, 4]);
        cells.extend(full_slot([14, 15, 16]));
        assert_eq!(evaluate(&snapshot(9, 3, &cells)), None);
    }

    #[test]
    fn tolerance_boundary() {
        // Exactly five cells is above tolerance; four is not.
        let five = [(2, 17), (2, 18), (3, 17), (3, 18), (4, 17)];
        let mut cells = full_slot([14, 15, 16]);
        cells.extend_from_slice(&five);
        assert_eq!(evaluate(&snapshot(2, 3, &cells)), None);

        let mut cells = full_slot([14, 15, 16]);
        cells.extend_from_slice(&five[..4]);
        assert_eq!(evaluate(&snapshot(2, 3, &cells)), Some(Move::BuildShield));
    }

    #[test]
    fn zero_lives_means_no_repair() {
        assert_eq!(evaluate(&snapshot(2, 0, &[])), None);
    }
}
