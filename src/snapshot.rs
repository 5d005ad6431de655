//! Per-tick battlefield data model.
//!
//! A `Snapshot` is built once per tick from the harness state file, read by
//! every evaluator, and discarded once a move has been written. Nothing in
//! here survives across ticks.

use thiserror::Error;

/// The fixed move vocabulary the harness accepts. Exactly one is written
/// per tick; `Nothing` is the explicit no-op, never a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Nothing,
    MoveLeft,
    MoveRight,
    Shoot,
    BuildAlienFactory,
    BuildMissileController,
    BuildShield,
}

impl Move {
    /// Wire spelling expected in `move.txt`.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Nothing => "Nothing",
            Move::MoveLeft => "MoveLeft",
            Move::MoveRight => "MoveRight",
            Move::Shoot => "Shoot",
            Move::BuildAlienFactory => "BuildAlienFactory",
            Move::BuildMissileController => "BuildMissileController",
            Move::BuildShield => "BuildShield",
        }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel direction of an alien formation. Waves sweep left/right and drop
/// one row when they hit a wall; `Down` only ever lasts a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

/// A single-cell entity: missile, bullet, alien or shield cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub id: i32,
    pub x: i32,
    pub y: i32,
}

/// A three-column structure (alien factory or missile controller),
/// anchored at its leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    pub id: i32,
    pub x: i32,
    pub y: i32,
}

/// A ship: one logical unit spanning three contiguous columns on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub id: i32,
    /// Wing columns, left to right. Invariant: `wings[i + 1] == wings[i] + 1`.
    pub wings: [i32; 3],
    pub row: i32,
}

impl Ship {
    pub fn left_wing(&self) -> i32 {
        self.wings[0]
    }

    pub fn center(&self) -> i32 {
        self.wings[1]
    }

    pub fn right_wing(&self) -> i32 {
        self.wings[2]
    }
}

/// Formation metadata for one side's alien wave. The alien positions
/// themselves live in [`SideState::aliens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveState {
    pub direction: Direction,
    /// Aliens spawned per respawn row (drives the leftward spawn column).
    pub wave_size: i32,
}

/// Everything one side owns this tick.
#[derive(Debug, Clone)]
pub struct SideState {
    pub lives: i32,
    pub missile_limit: usize,
    pub ship: Option<Ship>,
    pub missiles: Vec<Entity>,
    pub bullets: Vec<Entity>,
    pub aliens: Vec<Entity>,
    pub shields: Vec<Entity>,
    pub alien_factory: Option<Structure>,
    pub missile_controller: Option<Structure>,
    pub wave: WaveState,
}

impl Default for SideState {
    /// Harness defaults for a side before any cells are parsed.
    fn default() -> Self {
        Self {
            lives: 3,
            missile_limit: 1,
            ship: None,
            missiles: Vec::new(),
            bullets: Vec::new(),
            aliens: Vec::new(),
            shields: Vec::new(),
            alien_factory: None,
            missile_controller: None,
            wave: WaveState {
                direction: Direction::Right,
                wave_size: 3,
            },
        }
    }
}

/// The full per-tick battlefield: this bot's side and the opponent's.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub player: SideState,
    pub enemy: SideState,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("ship {id} wings are not contiguous: {wings:?}")]
    ShipWingsNotContiguous { id: i32, wings: [i32; 3] },
}

impl Snapshot {
    /// Fail fast on malformed geometry rather than computing a wrong move.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for ship in [&self.player.ship, &self.enemy.ship].into_iter().flatten() {
            let [left, center, right] = ship.wings;
            if center != left + 1 || right != left + 2 {
                return Err(SnapshotError::ShipWingsNotContiguous {
                    id: ship.id,
                    wings: ship.wings,
                });
            }
        }
        Ok(())
    }
}
