//! Round lifecycle: result submission, advancing, and undo.

use crate::logic::pairing::{pair_round, Pairing};
use crate::logic::standings::compute_standings;
use crate::logic::tables::assign_tables;
use crate::models::{
    MatchOutcome, MatchRecord, Phase, ReportedResult, Tournament, TournamentError,
};

/// Install a pairing as the current open round: assign tables positionally,
/// keep the forced-rematch flags, and record the bye (credited immediately
/// as a win with no opponent). `round_no` must already be set.
pub(crate) fn install_pairing(tournament: &mut Tournament, pairing: Pairing) {
    for &(a, b) in &pairing.forced_rematches {
        log::warn!(
            "round {}: forced rematch between {} and {}",
            tournament.round_no,
            tournament.player_name(a),
            tournament.player_name(b)
        );
    }
    tournament.pairings = assign_tables(&pairing.pairs);
    tournament.forced_rematches = pairing.forced_rematches;
    tournament.bye = pairing.bye;
    if let Some(player) = pairing.bye {
        tournament
            .match_log
            .push(MatchRecord::bye(tournament.round_no, player));
    }
}

/// Record one table's result. When the last open table reports, the round
/// closes automatically.
///
/// All preconditions are checked before the snapshot is pushed or the log
/// touched; a rejected submission leaves the state untouched.
pub fn submit_result(
    tournament: &mut Tournament,
    table: u32,
    reported: ReportedResult,
) -> Result<(), TournamentError> {
    if tournament.phase != Phase::RoundOpen {
        return Err(TournamentError::InvalidTransition);
    }
    let pairing = *tournament
        .pairings
        .iter()
        .find(|p| p.table == table)
        .ok_or(TournamentError::UnknownTable(table))?;
    if tournament.table_reported(table) {
        return Err(TournamentError::TableAlreadyReported(table));
    }
    let outcome = match reported {
        ReportedResult::Winner(id) if id == pairing.player_a => MatchOutcome::PlayerAWins,
        ReportedResult::Winner(id) if id == pairing.player_b => MatchOutcome::PlayerBWins,
        ReportedResult::Winner(id) => return Err(TournamentError::UnknownPlayer(id)),
        ReportedResult::Draw => MatchOutcome::Draw,
    };

    tournament.push_snapshot();
    let decks = tournament
        .tables_to_decks
        .get(&table)
        .cloned()
        .unwrap_or_default();
    let map = tournament.tables_to_maps.get(&table).cloned();
    tournament.match_log.push(MatchRecord::played(
        tournament.round_no,
        table,
        pairing.player_a,
        pairing.player_b,
        outcome,
        decks,
        map,
    ));
    if tournament.all_tables_reported() {
        tournament.phase = Phase::RoundClosed;
        log::info!("round {} closed: all tables reported", tournament.round_no);
    }
    Ok(())
}

/// Advance past a closed round: pair and open the next one, or complete the
/// tournament once the configured round count is reached.
pub fn advance_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.phase != Phase::RoundClosed {
        return Err(TournamentError::InvalidTransition);
    }

    if tournament.round_no >= tournament.rounds {
        tournament.push_snapshot();
        tournament.pairings.clear();
        tournament.bye = None;
        tournament.forced_rematches.clear();
        tournament.phase = Phase::Complete;
        log::info!("tournament complete after round {}", tournament.round_no);
        return Ok(());
    }

    let standings = compute_standings(
        &tournament.players,
        &tournament.match_log,
        tournament.buchholz,
    );
    let pairing = pair_round(&standings, &tournament.match_log)?;

    tournament.push_snapshot();
    tournament.round_no += 1;
    install_pairing(tournament, pairing);
    tournament.phase = Phase::RoundOpen;
    Ok(())
}

/// Roll back the most recent transition wholesale: pairings, match log,
/// phase, and roster move together, never independently.
///
/// Returns false when only the permanent baseline snapshot remains (a
/// no-op, not an error).
pub fn undo(tournament: &mut Tournament) -> bool {
    match tournament.history.pop() {
        Some(snapshot) => {
            snapshot.restore(tournament);
            true
        }
        None => false,
    }
}
