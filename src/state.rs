//! Harness state parsing.
//!
//! The match harness writes a full `state.json` into the bot's output
//! directory each tick: a `Map.Rows` grid of nullable cells plus a
//! `Players` array with per-side metadata. This module deserializes that
//! format and reduces it to the typed [`Snapshot`] the evaluators consume.
//!
//! The harness reports three-column entities (ship, alien factory, missile
//! controller) as three cells that all carry the entity's anchor X; the
//! real wing columns are anchor, anchor + 1, anchor + 2.

use crate::snapshot::{Direction, Entity, Ship, SideState, Snapshot, Structure, WaveState};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawState {
    #[serde(rename = "Map")]
    map: RawMap,
    #[serde(rename = "Players")]
    players: Vec<RawPlayer>,
}

#[derive(Debug, Deserialize)]
struct RawMap {
    #[serde(rename = "Rows")]
    rows: Vec<Vec<Option<RawCell>>>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    #[serde(rename = "Id", default)]
    id: i32,
    #[serde(rename = "Type")]
    kind: CellKind,
    #[serde(rename = "X")]
    x: i32,
    #[serde(rename = "Y")]
    y: i32,
    #[serde(rename = "PlayerNumber", default)]
    player_number: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum CellKind {
    Wall,
    Ship,
    Missile,
    Bullet,
    Alien,
    Shield,
    AlienFactory,
    MissileController,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(rename = "PlayerNumber")]
    player_number: i32,
    #[serde(rename = "Lives")]
    lives: i32,
    #[serde(rename = "MissileLimit")]
    missile_limit: usize,
    #[serde(rename = "AlienWaveSize")]
    alien_wave_size: i32,
    #[serde(rename = "AlienManager")]
    alien_manager: RawAlienManager,
}

#[derive(Debug, Deserialize)]
struct RawAlienManager {
    #[serde(rename = "DeltaX")]
    delta_x: i32,
}

/// Load and parse `<dir>/state.json`. A missing or malformed file is an
/// error; the decision engine is simply not invoked for that tick.
pub fn load(output_dir: &Path) -> Result<Snapshot> {
    let path = output_dir.join("state.json");
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed reading state file {}", path.display()))?;
    let state: RawState = serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing state file {}", path.display()))?;
    Ok(parse(&state))
}

/// Best-effort read of the textual map the harness writes alongside the
/// state; only used for logging.
pub fn load_map(output_dir: &Path) -> Option<String> {
    fs::read_to_string(output_dir.join("map.txt")).ok()
}

fn parse(raw: &RawState) -> Snapshot {
    let mut snapshot = Snapshot::default();

    for cell in raw.map.rows.iter().flatten().flatten() {
        if cell.kind == CellKind::Wall {
            continue;
        }
        // Player 1 is always this bot; everything else is the opponent.
        let side = if cell.player_number == 1 {
            &mut snapshot.player
        } else {
            &mut snapshot.enemy
        };
        place_cell(side, cell);
    }

    for player in &raw.players {
        let side = if player.player_number == 1 {
            &mut snapshot.player
        } else {
            &mut snapshot.enemy
        };
        side.lives = player.lives;
        side.missile_limit = player.missile_limit;
        side.wave = WaveState {
            direction: if player.alien_manager.delta_x > 0 {
                Direction::Right
            } else {
                Direction::Left
            },
            wave_size: player.alien_wave_size,
        };
    }

    snapshot
}

fn place_cell(side: &mut SideState, cell: &RawCell) {
    let entity = Entity {
        id: cell.id,
        x: cell.x,
        y: cell.y,
    };
    match cell.kind {
        CellKind::Missile => side.missiles.push(entity),
        CellKind::Bullet => side.bullets.push(entity),
        CellKind::Alien => side.aliens.push(entity),
        CellKind::Shield => side.shields.push(entity),
        CellKind::Ship => {
            // Three cells per ship, all anchored at the left wing; the
            // first one seen defines the unit.
            if side.ship.is_none() {
                side.ship = Some(Ship {
                    id: cell.id,
                    wings: [cell.x, cell.x + 1, cell.x + 2],
                    row: cell.y,
                });
            }
        }
        CellKind::AlienFactory => {
            if side.alien_factory.is_none() {
                side.alien_factory = Some(Structure {
                    id: cell.id,
                    x: cell.x,
                    y: cell.y,
                });
            }
        }
        CellKind::MissileController => {
            if side.missile_controller.is_none() {
                side.missile_controller = Some(Structure {
                    id: cell.id,
                    x: cell.x,
                    y: cell.y,
                });
            }
        }
        CellKind::Wall => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(kind: &str, id: i32, x: i32, y: i32, player: i32) -> String {
        format!(
            r#"{{"Id":{id},"Type":"{kind}","X":{x},"Y":{y},"PlayerNumber":{player}}}"#
        )
    }

    fn fixture() -> String {
        let rows = format!(
            "[[{}, null, {}], [{}, {}, {}], [{}, {}, {}]]",
            cell("Wall", 0, 0, 0, 0),
            cell("Alien", 10, 5, 3, 2),
            cell("Ship", 1, 8, 22, 1),
            cell("Ship", 1, 8, 22, 1),
            cell("Ship", 1, 8, 22, 1),
            cell("Shield", 20, 2, 19, 1),
            cell("Missile", 30, 6, 12, 1),
            cell("Bullet", 40, 9, 9, 2),
        );
        format!(
            r#"{{"Map":{{"Rows":{rows}}},
               "Players":[
                 {{"PlayerNumber":1,"Lives":2,"MissileLimit":1,
                   "AlienWaveSize":3,"AlienManager":{{"DeltaX":1}}}},
                 {{"PlayerNumber":2,"Lives":3,"MissileLimit":2,
                   "AlienWaveSize":4,"AlienManager":{{"DeltaX":-1}}}}
               ]}}"#
        )
    }

    #[test]
    fn parses_cells_and_metadata() {
        let raw: RawState = serde_json::from_str(&fixture()).unwrap();
        let snapshot = parse(&raw);

        let ship = snapshot.player.ship.expect("player ship");
        assert_eq!(ship.wings, [8, 9, 10]);
        assert_eq!(ship.row, 22);
        assert_eq!(snapshot.player.lives, 2);
        assert_eq!(snapshot.player.missile_limit, 1);
        assert_eq!(snapshot.player.shields.len(), 1);
        assert_eq!(snapshot.player.missiles.len(), 1);

        assert_eq!(snapshot.enemy.aliens, vec![Entity { id: 10, x: 5, y: 3 }]);
        assert_eq!(snapshot.enemy.bullets.len(), 1);
        assert_eq!(snapshot.enemy.lives, 3);
        assert_eq!(snapshot.enemy.wave.direction, Direction::Left);
        assert_eq!(snapshot.enemy.wave.wave_size, 4);
        assert_eq!(snapshot.player.wave.direction, Direction::Right);

        // Walls never become entities.
        assert!(snapshot.player.bullets.is_empty());
        assert!(snapshot.enemy.shields.is_empty());
    }

    #[test]
    fn parsed_ship_passes_validation() {
        let raw: RawState = serde_json::from_str(&fixture()).unwrap();
        let snapshot = parse(&raw);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn missing_state_file_is_an_error() {
        let err = load(Path::new("/nonexistent/output/dir")).unwrap_err();
        assert!(err.to_string().contains("state.json"));
    }
}
