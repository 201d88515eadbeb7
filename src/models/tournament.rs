//! Tournament aggregate, phases, and errors.

use crate::config::{DEFAULT_ROUNDS, MAX_PLAYERS};
use crate::models::game::{MatchRecord, TablePairing};
use crate::models::player::{Player, PlayerId};
use crate::models::snapshot::{Snapshot, SnapshotStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Transition called in a phase that forbids it.
    InvalidTransition,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayer,
    /// Player id not in the roster, or not seated at the reported table.
    UnknownPlayer(PlayerId),
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// Roster is at capacity (12 tables x 2 seats).
    RosterFull,
    /// No pairing exists at this table in the current round.
    UnknownTable(u32),
    /// This table already has a recorded result for the current round.
    TableAlreadyReported(u32),
    /// Fewer than 2 players and no bye slot; the tournament cannot proceed.
    PairingImpossible,
    /// Deck pool cannot supply enough distinct decks per table.
    NotEnoughDecks { needed: usize, available: usize },
    /// Map list cannot cover the tables.
    NotEnoughMaps { needed: usize, available: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidTransition => write!(f, "Invalid phase for this action"),
            TournamentError::DuplicatePlayer => write!(f, "A player with this name already exists"),
            TournamentError::UnknownPlayer(_) => write!(f, "Player not found"),
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::RosterFull => {
                write!(f, "Max {} players (12 tables x 2)", MAX_PLAYERS)
            }
            TournamentError::UnknownTable(t) => write!(f, "No pairing at table {}", t),
            TournamentError::TableAlreadyReported(t) => {
                write!(f, "Table {} already has a result this round", t)
            }
            TournamentError::PairingImpossible => {
                write!(f, "Not enough players to pair a round")
            }
            TournamentError::NotEnoughDecks { needed, available } => {
                write!(f, "Need at least {} decks (distinct per table), got {}", needed, available)
            }
            TournamentError::NotEnoughMaps { needed, available } => {
                write!(f, "Need at least {} maps, got {}", needed, available)
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Roster being built; no rounds started.
    #[default]
    Setup,
    /// Pairings generated, awaiting table results.
    RoundOpen,
    /// All tables reported; eligible to advance.
    RoundClosed,
    /// Round count reached; standings are final.
    Complete,
}

/// Which Buchholz convention the standings use.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuchholzVariant {
    /// Sum of each unique opponent's final win count (byes excluded).
    #[default]
    FinalWins,
    /// Sum of each unique opponent's final wins minus losses.
    WinsMinusLosses,
}

/// Full tournament state: roster, round number, match log, current pairings.
///
/// The snapshot history lives alongside the replayable fields but is
/// runtime-only and never serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub phase: Phase,
    /// Roster in insertion order; this order seeds deterministic tie-breaks.
    pub players: Vec<Player>,
    /// 0 in Setup, then the 1-based current round.
    pub round_no: u32,
    /// Configured number of Swiss rounds.
    pub rounds: u32,
    pub buchholz: BuchholzVariant,
    /// Optional RNG seed for reproducible deck/map dealing.
    pub seed: Option<u64>,
    /// Append-only result log; the single source of truth for standings.
    pub match_log: Vec<MatchRecord>,
    /// The open round's table pairings.
    pub pairings: Vec<TablePairing>,
    /// Player receiving a bye this round, if the roster is odd.
    pub bye: Option<PlayerId>,
    /// Pairs this round where no-rematch had to be relaxed.
    pub forced_rematches: Vec<(PlayerId, PlayerId)>,
    /// Decks dealt to each table at tournament start.
    pub tables_to_decks: BTreeMap<u32, Vec<String>>,
    /// Map assigned to each table at tournament start.
    pub tables_to_maps: BTreeMap<u32, String>,
    /// Undo history; runtime-only.
    #[serde(skip)]
    pub history: SnapshotStore,
}

impl Tournament {
    /// Create an empty tournament in Setup, with the empty state as the
    /// permanent undo baseline.
    pub fn new() -> Self {
        let mut t = Self {
            id: Uuid::new_v4(),
            phase: Phase::Setup,
            players: Vec::new(),
            round_no: 0,
            rounds: DEFAULT_ROUNDS,
            buchholz: BuchholzVariant::default(),
            seed: None,
            match_log: Vec::new(),
            pairings: Vec::new(),
            bye: None,
            forced_rematches: Vec::new(),
            tables_to_decks: BTreeMap::new(),
            tables_to_maps: BTreeMap::new(),
            history: SnapshotStore::default(),
        };
        t.rebase_history();
        t
    }

    /// Rebuild the undo history with the current state as its permanent
    /// baseline (used after loading a tournament from disk).
    pub fn rebase_history(&mut self) {
        self.history = SnapshotStore::seeded(Snapshot::capture(self));
    }

    /// Push a snapshot of the current (pre-transition) state.
    pub(crate) fn push_snapshot(&mut self) {
        let snap = Snapshot::capture(self);
        self.history.push(snap);
    }

    /// Look up a roster member by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Display name for a player id ("?" when unknown).
    pub fn player_name(&self, id: PlayerId) -> &str {
        self.player(id).map(|p| p.name.as_str()).unwrap_or("?")
    }

    /// Add a player (Setup only). Names must be unique, case-insensitive.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        if self.phase != Phase::Setup {
            return Err(TournamentError::InvalidTransition);
        }
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        if self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(trimmed))
        {
            return Err(TournamentError::DuplicatePlayer);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(TournamentError::RosterFull);
        }
        self.push_snapshot();
        self.players.push(Player::new(trimmed));
        Ok(())
    }

    /// Remove a player by id (Setup only).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.phase != Phase::Setup {
            return Err(TournamentError::InvalidTransition);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::UnknownPlayer(player_id))?;
        self.push_snapshot();
        self.players.remove(idx);
        Ok(())
    }

    /// Set the number of Swiss rounds (Setup only; at least 1).
    pub fn set_rounds(&mut self, rounds: u32) -> Result<(), TournamentError> {
        if self.phase != Phase::Setup || rounds == 0 {
            return Err(TournamentError::InvalidTransition);
        }
        self.push_snapshot();
        self.rounds = rounds;
        Ok(())
    }

    /// Set or clear the dealing seed (Setup only).
    pub fn set_seed(&mut self, seed: Option<u64>) -> Result<(), TournamentError> {
        if self.phase != Phase::Setup {
            return Err(TournamentError::InvalidTransition);
        }
        self.push_snapshot();
        self.seed = seed;
        Ok(())
    }

    /// Choose the Buchholz convention (Setup only).
    pub fn set_buchholz_variant(&mut self, variant: BuchholzVariant) -> Result<(), TournamentError> {
        if self.phase != Phase::Setup {
            return Err(TournamentError::InvalidTransition);
        }
        self.push_snapshot();
        self.buchholz = variant;
        Ok(())
    }

    /// True when the given table already has a result this round.
    pub fn table_reported(&self, table: u32) -> bool {
        self.match_log
            .iter()
            .any(|m| m.round == self.round_no && m.table == Some(table))
    }

    /// True when every table of the open round has a result in the log.
    pub fn all_tables_reported(&self) -> bool {
        self.pairings.iter().all(|p| self.table_reported(p.table))
    }

    /// Wipe back to an empty Setup roster, keeping the configured round
    /// count, seed, and tiebreak. Snapshot-guarded like every other
    /// mutation, so an accidental reset can be undone.
    pub fn reset(&mut self) {
        self.push_snapshot();
        self.phase = Phase::Setup;
        self.players.clear();
        self.round_no = 0;
        self.match_log.clear();
        self.pairings.clear();
        self.bye = None;
        self.forced_rematches.clear();
        self.tables_to_decks.clear();
        self.tables_to_maps.clear();
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}
