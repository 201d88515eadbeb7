//! Tournament engine: standings, pairing, tables, dealing, and transitions.

mod dealing;
mod pairing;
mod rounds;
mod setup;
mod standings;
mod tables;

pub use dealing::{deal_decks, deal_maps};
pub use pairing::{pair_round, Pairing};
pub use rounds::{advance_round, submit_result, undo};
pub use setup::start_tournament;
pub use standings::{assign_places, compute_standings, PlacedStanding, Standing};
pub use tables::assign_tables;
