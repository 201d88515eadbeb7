//! Fixed tournament configuration: hall layout, round count, decks, and maps.

/// Number of tables in the hall.
pub const NUM_TABLES: u32 = 12;

/// Exactly two players per table.
pub const SEATS_PER_TABLE: u32 = 2;

/// Roster capacity: 12 tables x 2 seats.
pub const MAX_PLAYERS: usize = (NUM_TABLES * SEATS_PER_TABLE) as usize;

/// Default number of Swiss rounds.
pub const DEFAULT_ROUNDS: u32 = 5;

/// Decks dealt to each table when the tournament starts.
pub const DECKS_PER_TABLE: usize = 4;

/// Autosaves and manual exports go here.
pub const SAVE_DIR: &str = "saves";

/// Deck pool (can be longer than needed).
pub const DEFAULT_DECK_POOL: &[&str] = &[
    "Alice", "Arthur", "Medusa", "Sindbad",
    "Alice", "Arthur", "Medusa", "Sindbad",
    "Enenga", "Wukon", "Achilles", "Bloody Mary",
    "Enenga", "Wukon", "Achilles", "Bloody Mary",
    "Sherlok", "Jackill&Hyde", "Invisible Man", "Dracula",
    "Sherlok", "Jackill&Hyde", "Invisible Man", "Dracula",
    "Houdini", "Djinn", "Red hood", "Beowulf",
    "Houdini", "Djinn", "Red hood", "Beowulf",
    "Robin Hood", "Big Foot", "Oda Nobunaga", "Tomoe Gozen",
    "Robin Hood", "Big Foot", "Oda Nobunaga", "Tomoe Gozen",
    "Shakespear", "Titania", "Hamlet", "Sisters",
    "Tesla", "Jill Trent", "Christmas", "Golden Bat",
    "Loki", "Pandora", "Black Beard", "Chupacabra",
];

/// Maps: exactly 12 provided (1 per table, assigned randomly).
pub const DEFAULT_MAPS: &[&str] = &[
    "Baskerville Manor",
    "Globe Theatre",
    "Marmoreal",
    "Sarpedon",
    "Soho",
    "Sherwood Forest",
    "Yukon",
    "Hanging gardens",
    "Heorot",
    "Santas workshop",
    "King Solomons mine",
    "Azuchi Castle",
];
