//! Data structures for the Swiss tournament: players, matches, state, snapshots.

mod game;
mod player;
mod snapshot;
mod tournament;

pub use game::{MatchId, MatchOutcome, MatchRecord, ReportedResult, TablePairing};
pub use player::{Player, PlayerId};
pub use snapshot::{Snapshot, SnapshotStore};
pub use tournament::{BuchholzVariant, Phase, Tournament, TournamentError, TournamentId};
