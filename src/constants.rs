//! Battlefield constants for the Space Invaders duel.
//!
//! The playing field is a fixed-width lane: walls sit on the outermost
//! columns, so columns 1..=17 are playable. Row 0 is the top of the screen
//! and rows grow downward toward this bot's ship.

// Field geometry
pub const LEFT_EDGE_COLUMN: i32 = 1;
pub const RIGHT_EDGE_COLUMN: i32 = 17;
pub const CENTER_COLUMN: i32 = 9;

// Enemy wave respawn
pub const RESPAWN_TRIGGER_ROW: i32 = 15;
pub const RESPAWN_SPAWN_ROW: i32 = 13;
pub const RESPAWN_COLUMN_SPACING: i32 = 3;
pub const RESPAWN_COLUMN_BOUND: i32 = 18;
pub const RESPAWN_RIGHTWARD_START_COLUMN: i32 = 2;
pub const RESPAWN_RIGHTWARD_TRIGGER_COLUMN: i32 = 2;
pub const RESPAWN_LEFTWARD_TRIGGER_COLUMN: i32 = 16;

// A missile crosses the whole enemy formation in this many rounds; the
// shot simulator never looks further ahead.
pub const SIMULATION_HORIZON_ROUNDS: u32 = 10;

// Dodging: a projectile three rows out in the first/last three playable
// columns leaves the ship no room to slip past on that side.
pub const DODGE_LEFT_WALL_COLUMN: i32 = 4;
pub const DODGE_RIGHT_WALL_COLUMN: i32 = 14;

// Structures (left-wing alignment columns and life costs)
pub const ALIEN_FACTORY_COLUMN: i32 = 2;
pub const ALIEN_FACTORY_MIN_LIVES: i32 = 1;
pub const MISSILE_CONTROLLER_COLUMN: i32 = 14;
pub const MISSILE_CONTROLLER_MIN_LIVES: i32 = 2;

// Shields: two three-column slots, repaired once their combined cell count
// drops to the tolerance.
pub const SHIELD_SLOTS: [[i32; 3]; 2] = [[2, 3, 4], [14, 15, 16]];
pub const SHIELD_HEALTH_TOLERANCE: usize = 4;

// Formation tracking: lateral offset from the center column is capped here.
pub const TRACK_OFFSET_CAP: i32 = 4;
