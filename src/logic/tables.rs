//! Table assignment: positional mapping of pairs onto tables 1..N.

use crate::models::{PlayerId, TablePairing};

/// Assign pairs to tables in the order the pairing engine produced them:
/// pair 0 sits at table 1, pair 1 at table 2, and so on. Purely positional,
/// no optimization objective.
pub fn assign_tables(pairs: &[(PlayerId, PlayerId)]) -> Vec<TablePairing> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, &(player_a, player_b))| TablePairing {
            table: i as u32 + 1,
            player_a,
            player_b,
        })
        .collect()
}
