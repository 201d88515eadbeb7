//! Match records, outcomes, and table pairings.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match record.
pub type MatchId = Uuid;

/// How a table ended, as recorded in the match log.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    PlayerAWins,
    PlayerBWins,
    Draw,
    /// Unpaired player in an odd round; credited a win with no opponent.
    Bye,
}

/// What the caller reports for one table of the open round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "player")]
pub enum ReportedResult {
    Winner(PlayerId),
    Draw,
}

/// One immutable row of the match log.
///
/// Created exactly once, when a result is submitted (or a bye is granted),
/// and never edited afterwards; a mis-recorded result is corrected by undoing
/// the submission and re-submitting.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub round: u32,
    /// None for a bye.
    pub table: Option<u32>,
    pub player_a: PlayerId,
    /// None for a bye.
    pub player_b: Option<PlayerId>,
    pub outcome: MatchOutcome,
    /// Decks dealt to this table (empty for a bye).
    pub decks: Vec<String>,
    /// Map assigned to this table (None for a bye).
    pub map: Option<String>,
}

impl MatchRecord {
    /// Record a played table.
    pub fn played(
        round: u32,
        table: u32,
        player_a: PlayerId,
        player_b: PlayerId,
        outcome: MatchOutcome,
        decks: Vec<String>,
        map: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            table: Some(table),
            player_a,
            player_b: Some(player_b),
            outcome,
            decks,
            map,
        }
    }

    /// Record a bye for one player.
    pub fn bye(round: u32, player: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            table: None,
            player_a: player,
            player_b: None,
            outcome: MatchOutcome::Bye,
            decks: Vec::new(),
            map: None,
        }
    }

    /// Both participants of a played match; None for a bye.
    pub fn participants(&self) -> Option<(PlayerId, PlayerId)> {
        self.player_b.map(|b| (self.player_a, b))
    }

    /// The player credited with a win, if any (a bye credits its player).
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            MatchOutcome::PlayerAWins | MatchOutcome::Bye => Some(self.player_a),
            MatchOutcome::PlayerBWins => self.player_b,
            MatchOutcome::Draw => None,
        }
    }
}

/// One table of the current open round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TablePairing {
    pub table: u32,
    pub player_a: PlayerId,
    pub player_b: PlayerId,
}
