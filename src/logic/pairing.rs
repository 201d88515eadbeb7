//! Swiss pairing: greedy fold over the standing order with rematch avoidance.

use crate::logic::standings::Standing;
use crate::models::{MatchRecord, PlayerId, TournamentError};
use std::collections::{HashMap, HashSet};

/// Proposed pairing for the next round.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pairing {
    /// Pairs in rank order; pair order determines table order.
    pub pairs: Vec<(PlayerId, PlayerId)>,
    /// Lowest-ranked leftover when the roster is odd.
    pub bye: Option<PlayerId>,
    /// Pairs where no-rematch had to be relaxed; surfaced to the caller,
    /// never silently hidden.
    pub forced_rematches: Vec<(PlayerId, PlayerId)>,
}

/// Pair the next round from the standing order.
///
/// Walks the order top to bottom. Each unpaired player takes the nearest
/// lower-ranked player they have not yet met; skipped players stay in place
/// for the next slot, so pairing stays close to rank-adjacency. When every
/// remaining candidate is a rematch, the nearest-ranked one is taken anyway
/// and the pair is flagged as a forced rematch. With an odd roster the
/// single leftover receives the bye.
///
/// Given identical standings and match history the output is identical
/// every time; nothing here is randomized.
pub fn pair_round(
    standings: &[Standing],
    match_log: &[MatchRecord],
) -> Result<Pairing, TournamentError> {
    if standings.is_empty() {
        return Err(TournamentError::PairingImpossible);
    }

    let opponents = opponents_from_log(match_log);
    let order: Vec<PlayerId> = standings.iter().map(|s| s.player).collect();
    let mut paired: HashSet<PlayerId> = HashSet::new();
    let mut out = Pairing::default();

    for i in 0..order.len() {
        let a = order[i];
        if paired.contains(&a) {
            continue;
        }
        let candidates: Vec<usize> = (i + 1..order.len())
            .filter(|&j| !paired.contains(&order[j]))
            .collect();
        if candidates.is_empty() {
            // a is the last unpaired player; with an odd roster that is the
            // lowest-ranked leftover and it takes the bye.
            if order.len() % 2 == 1 {
                out.bye = Some(a);
                paired.insert(a);
                continue;
            }
            return Err(TournamentError::PairingImpossible);
        }
        let played = opponents.get(&a);
        let fresh = candidates
            .iter()
            .copied()
            .find(|&j| played.map_or(true, |opps| !opps.contains(&order[j])));
        let (j, forced) = match fresh {
            Some(j) => (j, false),
            // No legal partner: relax the constraint for this single pair.
            None => (candidates[0], true),
        };
        let b = order[j];
        paired.insert(a);
        paired.insert(b);
        out.pairs.push((a, b));
        if forced {
            out.forced_rematches.push((a, b));
        }
    }
    Ok(out)
}

/// Unique opponents per player, derived from the log (byes contribute none).
fn opponents_from_log(match_log: &[MatchRecord]) -> HashMap<PlayerId, HashSet<PlayerId>> {
    let mut opponents: HashMap<PlayerId, HashSet<PlayerId>> = HashMap::new();
    for m in match_log {
        if let Some((a, b)) = m.participants() {
            opponents.entry(a).or_default().insert(b);
            opponents.entry(b).or_default().insert(a);
        }
    }
    opponents
}
