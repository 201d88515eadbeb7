//! Deck and map dealing: constrained-random draw, done once per tournament.

use crate::models::TournamentError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

/// Deal `decks_per_table` decks to each table, all distinct within a table.
///
/// Shuffles the pool, then fills tables in order; when the next pool entry
/// already sits on the table, the nearest later distinct entry is swapped
/// forward.
pub fn deal_decks(
    pool: &[&str],
    num_tables: u32,
    decks_per_table: usize,
    rng: &mut impl Rng,
) -> Result<BTreeMap<u32, Vec<String>>, TournamentError> {
    let needed = num_tables as usize * decks_per_table;
    if pool.len() < needed {
        return Err(TournamentError::NotEnoughDecks {
            needed,
            available: pool.len(),
        });
    }

    let mut pool: Vec<&str> = pool.to_vec();
    pool.shuffle(rng);

    let mut out = BTreeMap::new();
    let mut idx = 0;
    for table in 1..=num_tables {
        let mut decks: Vec<String> = Vec::with_capacity(decks_per_table);
        let mut on_table: HashSet<&str> = HashSet::new();
        for _ in 0..decks_per_table {
            let pick = (idx..pool.len())
                .find(|&j| !on_table.contains(pool[j]))
                .ok_or(TournamentError::NotEnoughDecks {
                    needed,
                    available: pool.len(),
                })?;
            pool.swap(idx, pick);
            let chosen = pool[idx];
            idx += 1;
            on_table.insert(chosen);
            decks.push(chosen.to_string());
        }
        out.insert(table, decks);
    }
    Ok(out)
}

/// Assign exactly one unique map to each table.
pub fn deal_maps(
    maps: &[&str],
    num_tables: u32,
    rng: &mut impl Rng,
) -> Result<BTreeMap<u32, String>, TournamentError> {
    if maps.len() < num_tables as usize {
        return Err(TournamentError::NotEnoughMaps {
            needed: num_tables as usize,
            available: maps.len(),
        });
    }
    let mut shuffled: Vec<&str> = maps.to_vec();
    shuffled.shuffle(rng);
    Ok((1..=num_tables)
        .map(|t| (t, shuffled[(t - 1) as usize].to_string()))
        .collect())
}
