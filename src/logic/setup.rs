//! Setup phase: start the tournament (Setup -> RoundOpen for round 1).

use crate::config::{DECKS_PER_TABLE, DEFAULT_DECK_POOL, DEFAULT_MAPS, NUM_TABLES};
use crate::logic::dealing::{deal_decks, deal_maps};
use crate::logic::pairing::pair_round;
use crate::logic::rounds::install_pairing;
use crate::logic::standings::compute_standings;
use crate::models::{Phase, Tournament, TournamentError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Start the tournament: deal decks and maps to the tables once, then pair
/// and open round 1. Requires at least 2 players.
///
/// Everything is computed before the pre-transition snapshot is pushed, so a
/// failed start leaves the tournament exactly as it was.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.phase != Phase::Setup {
        return Err(TournamentError::InvalidTransition);
    }
    if tournament.players.len() < 2 {
        return Err(TournamentError::PairingImpossible);
    }

    let mut rng: Box<dyn RngCore> = match tournament.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let decks = deal_decks(DEFAULT_DECK_POOL, NUM_TABLES, DECKS_PER_TABLE, &mut rng)?;
    let maps = deal_maps(DEFAULT_MAPS, NUM_TABLES, &mut rng)?;

    let standings = compute_standings(
        &tournament.players,
        &tournament.match_log,
        tournament.buchholz,
    );
    let pairing = pair_round(&standings, &tournament.match_log)?;

    tournament.push_snapshot();
    tournament.tables_to_decks = decks;
    tournament.tables_to_maps = maps;
    tournament.round_no = 1;
    install_pairing(tournament, pairing);
    tournament.phase = Phase::RoundOpen;
    log::info!(
        "tournament started: {} players, {} rounds",
        tournament.players.len(),
        tournament.rounds
    );
    Ok(())
}
