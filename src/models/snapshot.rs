//! Snapshot stack backing multi-step undo.

use crate::models::game::{MatchRecord, TablePairing};
use crate::models::player::{Player, PlayerId};
use crate::models::tournament::{BuchholzVariant, Phase, Tournament};
use std::collections::BTreeMap;

/// Deep copy of every replayable tournament field, taken at a transition
/// boundary.
///
/// The state machine never reads these fields; it only asks the store to
/// push the current state or pop back to an earlier one.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    phase: Phase,
    players: Vec<Player>,
    round_no: u32,
    rounds: u32,
    buchholz: BuchholzVariant,
    seed: Option<u64>,
    match_log: Vec<MatchRecord>,
    pairings: Vec<TablePairing>,
    bye: Option<PlayerId>,
    forced_rematches: Vec<(PlayerId, PlayerId)>,
    tables_to_decks: BTreeMap<u32, Vec<String>>,
    tables_to_maps: BTreeMap<u32, String>,
}

impl Snapshot {
    /// Capture the tournament's current state.
    pub fn capture(tournament: &Tournament) -> Self {
        Self {
            phase: tournament.phase,
            players: tournament.players.clone(),
            round_no: tournament.round_no,
            rounds: tournament.rounds,
            buchholz: tournament.buchholz,
            seed: tournament.seed,
            match_log: tournament.match_log.clone(),
            pairings: tournament.pairings.clone(),
            bye: tournament.bye,
            forced_rematches: tournament.forced_rematches.clone(),
            tables_to_decks: tournament.tables_to_decks.clone(),
            tables_to_maps: tournament.tables_to_maps.clone(),
        }
    }

    /// Replace the tournament's live state with this snapshot.
    pub fn restore(self, tournament: &mut Tournament) {
        tournament.phase = self.phase;
        tournament.players = self.players;
        tournament.round_no = self.round_no;
        tournament.rounds = self.rounds;
        tournament.buchholz = self.buchholz;
        tournament.seed = self.seed;
        tournament.match_log = self.match_log;
        tournament.pairings = self.pairings;
        tournament.bye = self.bye;
        tournament.forced_rematches = self.forced_rematches;
        tournament.tables_to_decks = self.tables_to_decks;
        tournament.tables_to_maps = self.tables_to_maps;
    }
}

/// Stack of immutable snapshots.
///
/// Seeded with the state that existed before any transition ran; that
/// baseline entry is permanent, so undo can always walk back to the
/// pre-tournament state but never past it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotStore {
    stack: Vec<Snapshot>,
}

impl SnapshotStore {
    /// Store seeded with its permanent baseline snapshot.
    pub fn seeded(baseline: Snapshot) -> Self {
        Self {
            stack: vec![baseline],
        }
    }

    /// Number of snapshots held, baseline included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True when only the permanent baseline remains.
    pub fn at_baseline(&self) -> bool {
        self.stack.len() <= 1
    }

    /// Push a pre-transition snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.stack.push(snapshot);
    }

    /// Pop the newest snapshot. Refuses to remove the baseline.
    pub fn pop(&mut self) -> Option<Snapshot> {
        if self.stack.len() <= 1 {
            None
        } else {
            self.stack.pop()
        }
    }
}
