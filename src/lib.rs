//! Swiss tournament organizer: library with models, engine logic, and persistence.

pub mod config;
pub mod logic;
pub mod models;
pub mod persistence;

pub use logic::{
    advance_round, assign_places, assign_tables, compute_standings, deal_decks, deal_maps,
    pair_round, start_tournament, submit_result, undo, Pairing, PlacedStanding, Standing,
};
pub use models::{
    BuchholzVariant, MatchId, MatchOutcome, MatchRecord, Phase, Player, PlayerId, ReportedResult,
    Snapshot, SnapshotStore, TablePairing, Tournament, TournamentError, TournamentId,
};
pub use persistence::{import_roster_csv, JsonStore, PersistenceError, SaveFile, SaveMeta};
