//! Standings: wins/losses, Buchholz, head-to-head, competition ranking.

use crate::models::{BuchholzVariant, MatchOutcome, MatchRecord, Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Derived standing for one player.
///
/// Never stored: always recomputed from the match log, so undo can never
/// leave standings stale (the log is the single source of truth).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub wins: u32,
    pub losses: u32,
    pub buchholz: i32,
    /// True iff this player won every direct match they played against the
    /// opponents tied with them on (wins, buchholz).
    pub head_to_head: bool,
    /// Roster insertion index; the final, deterministic tie-break.
    pub seed: usize,
}

/// Standing plus a competition-ranking place (tied players share a place).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlacedStanding {
    pub place: u32,
    pub player: PlayerId,
    pub wins: u32,
    pub losses: u32,
    pub buchholz: i32,
}

/// Compute the full standing order from the match log.
///
/// Two passes: wins and losses accumulate in log order (a bye counts as a
/// win, a draw as neither), then Buchholz sums each player's unique
/// opponents' FINAL records, so it reflects end-of-log opponent strength
/// rather than strength at the time the match was played. Byes contribute
/// no opponent. Total order: wins desc, Buchholz desc, head-to-head desc,
/// seed asc.
pub fn compute_standings(
    roster: &[Player],
    match_log: &[MatchRecord],
    variant: BuchholzVariant,
) -> Vec<Standing> {
    let mut wins: HashMap<PlayerId, u32> = roster.iter().map(|p| (p.id, 0)).collect();
    let mut losses: HashMap<PlayerId, u32> = roster.iter().map(|p| (p.id, 0)).collect();
    let mut opponents: HashMap<PlayerId, HashSet<PlayerId>> = HashMap::new();

    for m in match_log {
        match m.outcome {
            MatchOutcome::PlayerAWins => {
                if let Some((a, b)) = m.participants() {
                    *wins.entry(a).or_default() += 1;
                    *losses.entry(b).or_default() += 1;
                }
            }
            MatchOutcome::PlayerBWins => {
                if let Some((a, b)) = m.participants() {
                    *losses.entry(a).or_default() += 1;
                    *wins.entry(b).or_default() += 1;
                }
            }
            MatchOutcome::Draw => {}
            MatchOutcome::Bye => {
                *wins.entry(m.player_a).or_default() += 1;
            }
        }
        if let Some((a, b)) = m.participants() {
            opponents.entry(a).or_default().insert(b);
            opponents.entry(b).or_default().insert(a);
        }
    }

    let mut standings: Vec<Standing> = roster
        .iter()
        .enumerate()
        .map(|(seed, p)| {
            let buchholz = opponents
                .get(&p.id)
                .map(|opps| {
                    opps.iter()
                        .map(|o| {
                            let w = wins.get(o).copied().unwrap_or(0) as i32;
                            match variant {
                                BuchholzVariant::FinalWins => w,
                                BuchholzVariant::WinsMinusLosses => {
                                    w - losses.get(o).copied().unwrap_or(0) as i32
                                }
                            }
                        })
                        .sum()
                })
                .unwrap_or(0);
            Standing {
                player: p.id,
                wins: wins.get(&p.id).copied().unwrap_or(0),
                losses: losses.get(&p.id).copied().unwrap_or(0),
                buchholz,
                head_to_head: true,
                seed,
            }
        })
        .collect();

    // Head-to-head flags only discriminate inside (wins, buchholz) tie groups.
    let mut groups: HashMap<(u32, i32), Vec<usize>> = HashMap::new();
    for (idx, s) in standings.iter().enumerate() {
        groups.entry((s.wins, s.buchholz)).or_default().push(idx);
    }
    for indices in groups.values() {
        if indices.len() < 2 {
            continue;
        }
        for &i in indices {
            let a = standings[i].player;
            let beat_all = indices.iter().all(|&j| {
                if i == j {
                    return true;
                }
                match last_direct_meeting(a, standings[j].player, match_log) {
                    Some(result) => result == Some(a),
                    None => true,
                }
            });
            standings[i].head_to_head = beat_all;
        }
    }

    standings.sort_by(|x, y| {
        y.wins
            .cmp(&x.wins)
            .then(y.buchholz.cmp(&x.buchholz))
            .then(y.head_to_head.cmp(&x.head_to_head))
            .then(x.seed.cmp(&y.seed))
    });
    standings
}

/// Competition ranking over an already-sorted standing order.
///
/// Adjacent players share a place iff their wins and Buchholz are equal and
/// no direct head-to-head result exists between them (a draw is no result).
pub fn assign_places(standings: &[Standing], match_log: &[MatchRecord]) -> Vec<PlacedStanding> {
    let mut out = Vec::with_capacity(standings.len());
    let mut place = 1u32;
    for (idx, s) in standings.iter().enumerate() {
        if idx > 0 {
            let prev = &standings[idx - 1];
            let shares_place = s.wins == prev.wins
                && s.buchholz == prev.buchholz
                && last_direct_meeting(s.player, prev.player, match_log)
                    .and_then(|winner| winner)
                    .is_none();
            if !shares_place {
                place = idx as u32 + 1;
            }
        }
        out.push(PlacedStanding {
            place,
            player: s.player,
            wins: s.wins,
            losses: s.losses,
            buchholz: s.buchholz,
        });
    }
    out
}

/// Last direct meeting between two players: `Some(Some(winner))`,
/// `Some(None)` for a draw, or `None` if they never played. When a pair met
/// more than once (forced rematch), the LAST result decides.
fn last_direct_meeting(
    a: PlayerId,
    b: PlayerId,
    match_log: &[MatchRecord],
) -> Option<Option<PlayerId>> {
    let mut result = None;
    for m in match_log {
        if let Some((x, y)) = m.participants() {
            if (x == a && y == b) || (x == b && y == a) {
                result = Some(m.winner());
            }
        }
    }
    result
}
