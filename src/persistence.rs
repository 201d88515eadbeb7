//! Disk collaborator: JSON snapshots of the tournament and CSV roster import.
//!
//! The engine never touches the filesystem; the owning caller invokes this
//! store at round boundaries (autosave) and on explicit export/import.

use crate::config::{NUM_TABLES, SAVE_DIR, SEATS_PER_TABLE};
use crate::models::{BuchholzVariant, Tournament};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors from the disk store.
#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "Could not read or write file: {}", e),
            PersistenceError::Json(e) => write!(f, "Invalid state structure: {}", e),
            PersistenceError::Csv(e) => write!(f, "Invalid roster file: {}", e),
        }
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Json(e)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(e: csv::Error) -> Self {
        PersistenceError::Csv(e)
    }
}

/// Format version of the save file.
const SAVE_VERSION: u32 = 1;

/// Metadata written alongside every save.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveMeta {
    pub version: u32,
    pub timestamp: String,
    pub num_tables: u32,
    pub seats_per_table: u32,
    pub rounds: u32,
    pub tiebreak: BuchholzVariant,
}

/// On-disk form: metadata plus the full tournament state. Every field of
/// the data model round-trips losslessly, including roster order (it seeds
/// future tie-breaks).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub meta: SaveMeta,
    pub tournament: Tournament,
}

/// JSON file store rooted at a save directory.
#[derive(Clone, Debug)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the default save directory.
    pub fn default_dir() -> Self {
        Self::new(SAVE_DIR)
    }

    fn timestamp() -> String {
        Local::now().format("%Y%m%d_%H%M%S").to_string()
    }

    fn save_file(tournament: &Tournament) -> SaveFile {
        SaveFile {
            meta: SaveMeta {
                version: SAVE_VERSION,
                timestamp: Self::timestamp(),
                num_tables: NUM_TABLES,
                seats_per_table: SEATS_PER_TABLE,
                rounds: tournament.rounds,
                tiebreak: tournament.buchholz,
            },
            tournament: tournament.clone(),
        }
    }

    /// Write the tournament to an explicit path (manual export).
    pub fn save(&self, tournament: &Tournament, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&Self::save_file(tournament))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Automatic save into the store directory; returns the written path.
    /// Filename: `{reason}_r{round:02}_{timestamp}.json`.
    pub fn autosave(
        &self,
        tournament: &Tournament,
        reason: &str,
    ) -> Result<PathBuf, PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let name = format!(
            "{}_r{:02}_{}.json",
            reason,
            tournament.round_no,
            Self::timestamp()
        );
        let path = self.dir.join(name);
        self.save(tournament, &path)?;
        Ok(path)
    }

    /// Load a tournament from disk. The loaded state becomes the permanent
    /// baseline of a fresh undo history.
    pub fn load(&self, path: &Path) -> Result<Tournament, PersistenceError> {
        let json = fs::read_to_string(path)?;
        let file: SaveFile = serde_json::from_str(&json)?;
        let mut tournament = file.tournament;
        tournament.rebase_history();
        Ok(tournament)
    }
}

/// Read player names from the first column of a CSV file (no header row).
/// Blank entries are skipped.
pub fn import_roster_csv(path: &Path) -> Result<Vec<String>, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(field) = record.get(0) {
            let name = field.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}
