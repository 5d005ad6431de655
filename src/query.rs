//! Positional queries over entity collections.
//!
//! Entity sets are tiny (a handful of projectiles, at most a few dozen
//! aliens), so every query is a plain O(n) scan.

use crate::snapshot::Entity;

/// Whether any entity occupies the exact cell `(x, y)`.
pub fn any_at(entities: &[Entity], x: i32, y: i32) -> bool {
    entities.iter().any(|e| e.x == x && e.y == y)
}

/// Whether any entity sits in column `x`, at any row.
pub fn any_in_column(entities: &[Entity], x: i32) -> bool {
    entities.iter().any(|e| e.x == x)
}

/// How many entities sit in column `x`.
pub fn count_in_column(entities: &[Entity], x: i32) -> usize {
    entities.iter().filter(|e| e.x == x).count()
}

/// Distinct occupied columns, sorted ascending.
pub fn occupied_columns(entities: &[Entity]) -> Vec<i32> {
    let mut columns: Vec<i32> = entities.iter().map(|e| e.x).collect();
    columns.sort_unstable();
    columns.dedup();
    columns
}
