//! Forward simulation of the enemy alien wave.
//!
//! Answers one question: will a missile fired from the ship's center column
//! this tick strike an enemy alien? The simulation owns a typed copy of
//! exactly the state it mutates (alien and missile positions plus destroyed
//! flags) and advances it round by round for a bounded horizon.
//!
//! Per round, in order: the wave direction is updated against the field
//! edges, a fresh top row respawns if due, every missile climbs one row,
//! every alien takes one step, and collisions are resolved. Destroyed
//! aliens and missiles stay in the sets — they keep counting for edge and
//! respawn checks — but stop participating in collisions.

use crate::constants::*;
use crate::snapshot::{Direction, Entity, SideState};

#[derive(Debug, Clone, Copy)]
struct SimAlien {
    x: i32,
    y: i32,
    destroyed: bool,
}

#[derive(Debug, Clone, Copy)]
struct SimMissile {
    x: i32,
    y: i32,
    destroyed: bool,
    /// The hypothetical missile fired this tick. It only answers yes/no:
    /// a probe hit sets the flag without destroying anything.
    probe: bool,
}

impl SimMissile {
    /// A real in-flight missile occupies the column one right of its stored
    /// coordinate; the probe's column is used as-is. This asymmetry is
    /// load-bearing for collision alignment.
    fn effective_column(&self) -> i32 {
        if self.probe {
            self.x
        } else {
            self.x + 1
        }
    }
}

/// One shot-prediction run. Built fresh per tick, stepped, and dropped.
#[derive(Debug, Clone)]
pub struct WaveSimulation {
    aliens: Vec<SimAlien>,
    missiles: Vec<SimMissile>,
    direction: Direction,
    wave_size: i32,
}

impl WaveSimulation {
    /// Copy the enemy wave and this side's in-flight missiles, and add the
    /// probe missile at `(probe_column, probe_row)`.
    pub fn new(
        enemy: &SideState,
        own_missiles: &[Entity],
        probe_column: i32,
        probe_row: i32,
    ) -> Self {
        let aliens = enemy
            .aliens
            .iter()
            .map(|a| SimAlien {
                x: a.x,
                y: a.y,
                destroyed: false,
            })
            .collect();
        let mut missiles: Vec<SimMissile> = own_missiles
            .iter()
            .map(|m| SimMissile {
                x: m.x,
                y: m.y,
                destroyed: false,
                probe: false,
            })
            .collect();
        missiles.push(SimMissile {
            x: probe_column,
            y: probe_row,
            destroyed: false,
            probe: true,
        });

        Self {
            aliens,
            missiles,
            direction: enemy.wave.direction,
            wave_size: enemy.wave.wave_size,
        }
    }

    /// Run up to the fixed horizon, reporting a hit as soon as the probe
    /// connects.
    pub fn predicts_hit(mut self) -> bool {
        for _ in 0..SIMULATION_HORIZON_ROUNDS {
            if self.step_round() {
                return true;
            }
        }
        false
    }

    /// Advance one round; true if the probe hit an alien this round.
    fn step_round(&mut self) -> bool {
        let at_left_edge = self.aliens.iter().any(|a| a.x == LEFT_EDGE_COLUMN);
        let at_right_edge = self.aliens.iter().any(|a| a.x == RIGHT_EDGE_COLUMN);

        self.direction = next_direction(self.direction, at_left_edge, at_right_edge);
        self.respawn_wave_if_due();

        for missile in &mut self.missiles {
            missile.y -= 1;
        }
        for alien in &mut self.aliens {
            match self.direction {
                Direction::Left => alien.x -= 1,
                Direction::Right => alien.x += 1,
                Direction::Down => alien.y += 1,
            }
        }

        self.resolve_collisions()
    }

    /// Spawn a fresh top row once the youngest row has marched two rows
    /// down and the wave's leading edge column is still populated.
    fn respawn_wave_if_due(&mut self) {
        let Some(top_row) = self.aliens.iter().map(|a| a.y).min() else {
            return;
        };
        if top_row != RESPAWN_TRIGGER_ROW {
            return;
        }

        let (start_column, trigger_column) = match self.direction {
            Direction::Right => (
                RESPAWN_RIGHTWARD_START_COLUMN,
                RESPAWN_RIGHTWARD_TRIGGER_COLUMN,
            ),
            _ => (
                RESPAWN_LEFTWARD_TRIGGER_COLUMN - (self.wave_size - 1) * RESPAWN_COLUMN_SPACING,
                RESPAWN_LEFTWARD_TRIGGER_COLUMN,
            ),
        };
        if !self.aliens.iter().any(|a| a.x == trigger_column) {
            return;
        }

        let mut column = start_column;
        while column < RESPAWN_COLUMN_BOUND {
            self.aliens.push(SimAlien {
                x: column,
                y: RESPAWN_SPAWN_ROW,
                destroyed: false,
            });
            column += RESPAWN_COLUMN_SPACING;
        }
    }

    fn resolve_collisions(&mut self) -> bool {
        let mut probe_hit = false;
        for alien in &mut self.aliens {
            for missile in &mut self.missiles {
                if missile.y != alien.y || missile.effective_column() != alien.x {
                    continue;
                }
                if alien.destroyed || missile.destroyed {
                    continue;
                }
                if missile.probe {
                    probe_hit = true;
                } else {
                    missile.destroyed = true;
                    alien.destroyed = true;
                }
            }
        }
        probe_hit
    }
}

/// Direction sub-state-machine: a wave touching its leading wall drops
/// down for one round, then sweeps back the other way.
fn next_direction(current: Direction, at_left_edge: bool, at_right_edge: bool) -> Direction {
    match current {
        Direction::Left if at_left_edge => Direction::Down,
        Direction::Right if at_right_edge => Direction::Down,
        Direction::Down if at_left_edge => Direction::Right,
        Direction::Down if at_right_edge => Direction::Left,
        other => other,
    }
}
