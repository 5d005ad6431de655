//! Lateral repositioning toward the denser half of the enemy wave.
//!
//! The wave's occupied columns are split at their midpoint (the middle
//! column of an odd-width wave belongs to neither half). The ship's target
//! column is the field center shifted toward the heavier half, by at most
//! the offset cap; equal halves leave the ship centered.

use crate::constants::{CENTER_COLUMN, TRACK_OFFSET_CAP};
use crate::query;
use crate::snapshot::{Move, Snapshot};

pub fn evaluate(snapshot: &Snapshot) -> Option<Move> {
    let ship = snapshot.player.ship.as_ref()?;
    let aliens = &snapshot.enemy.aliens;

    let columns = query::occupied_columns(aliens);
    let column_count = columns.len() as i32;
    let middle_index = (column_count + 1) / 2 - 1;
    let even_split = column_count % 2 == 0;

    let mut left_count = 0usize;
    let mut right_count = 0usize;
    for (index, &column) in columns.iter().enumerate() {
        let index = index as i32;
        if !even_split && index == middle_index {
            continue;
        }
        let in_column = query::count_in_column(aliens, column);
        if index <= middle_index {
            left_count += in_column;
        } else {
            right_count += in_column;
        }
    }

    let magnitude = column_count.min(TRACK_OFFSET_CAP);
    let offset = match left_count.cmp(&right_count) {
        core::cmp::Ordering::Greater => -magnitude,
        core::cmp::Ordering::Equal => 0,
        core::cmp::Ordering::Less => magnitude,
    };

    let target_column = CENTER_COLUMN + offset;
    match ship.center().cmp(&target_column) {
        core::cmp::Ordering::Less => Some(Move::MoveRight),
        core::cmp::Ordering::Greater => Some(Move::MoveLeft),
        core::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Entity, Ship, SideState};

    fn snapshot(ship_left: i32, alien_cells: &[(i32, i32)]) -> Snapshot {
        Snapshot {
            player: SideState {
                ship: Some(Ship {
                    id: 1,
                    wings: [ship_left, ship_left + 1, ship_left + 2],
                    row: 22,
                }),
                ..SideState::default()
            },
            enemy: SideState {
                aliens: alien_cells
                    .iter()
                    .enumerate()
                    .map(|(i, &(x, y))| Entity {
                        id: 60 + i as i32,
                        x,
                        y,
                    })
                    .collect(),
                ..SideState::default()
            },
        }
    }

    #[test]
    fn shifts_toward_a_right_heavy_wave() {
        // Four columns, all density on the right half: offset +4, target 13.
        let aliens = [(11, 3), (12, 3), (13, 3), (14, 3), (13, 4), (14, 4)];
        let snap = snapshot(8, &aliens); // center 9 < 13
        assert_eq!(evaluate(&snap), Some(Move::MoveRight));
    }

    #[test]
    fn shifts_toward_a_left_heavy_wave() {
        // Two columns on the left, offset -2, target 7; center 9 > 7.
        let aliens = [(2, 3), (2, 4), (5, 3)];
        let snap = snapshot(8, &aliens);
        assert_eq!(evaluate(&snap), Some(Move::MoveLeft));
    }

    #[test]
    fn offset_is_capped_at_four() {
        // Six left-heavy columns: magnitude still 4, target column 5.
        let aliens = [(1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (1, 4)];
        // Ship center exactly on the capped target: no move.
        assert_eq!(evaluate(&snapshot(4, &aliens)), None);
        assert_eq!(evaluate(&snapshot(3, &aliens)), Some(Move::MoveRight));
    }

    #[test]
    fn odd_width_excludes_the_middle_column() {
        // Three columns; only the middle one is heavy — halves tie at one
        // alien each, so the ship stays centered.
        let aliens = [(4, 3), (9, 3), (9, 4), (9, 5), (14, 3)];
        assert_eq!(evaluate(&snapshot(8, &aliens)), None);
    }

    #[test]
    fn balanced_wave_recenters_the_ship() {
        let aliens = [(5, 3), (13, 3)];
        assert_eq!(evaluate(&snapshot(2, &aliens)), Some(Move::MoveRight));
        assert_eq!(evaluate(&snapshot(12, &aliens)), Some(Move::MoveLeft));
        assert_eq!(evaluate(&snapshot(8, &aliens)), None);
    }

    #[test]
    fn empty_wave_still_recenters() {
        assert_eq!(evaluate(&snapshot(2, &[])), Some(Move::MoveRight));
        assert_eq!(evaluate(&snapshot(8, &[])), None);
    }
}
