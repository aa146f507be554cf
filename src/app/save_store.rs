// src/app/save_store.rs
//! Reads and writes save files in one directory.
//!
//! The directory is an explicit handle owned by the session; nothing here
//! touches the filesystem until `SaveDirectory::open` is called.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::SaveConfig;
use crate::error::PersistenceError;
use crate::game::Game;
use crate::protocol::{self, StateDocument};

/// One entry of `SaveDirectory::list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub name: String,
    pub started_at: u64,
    pub saved_at: u64,
    pub move_count: u32,
}

/// The metadata part of a save file. Missing fields default to zero.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct SaveHeader {
    started_at: u64,
    saved_at: u64,
    move_count: u32,
}

#[derive(Debug, Clone)]
pub struct SaveDirectory {
    root: PathBuf,
    extension: String,
}

impl SaveDirectory {
    /// Opens (and creates if missing) the save directory described by `config`.
    pub fn open(config: &SaveConfig) -> Result<Self, PersistenceError> {
        fs::create_dir_all(&config.directory)
            .map_err(|e| PersistenceError::io(&config.directory, e))?;
        info!("Save directory ready at {}", config.directory.display());
        Ok(Self { root: config.directory.clone(), extension: config.extension.clone() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the save file for `name`. Names that would escape the directory are refused.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, PersistenceError> {
        let trimmed = name.trim();
        let is_valid = !trimmed.is_empty()
            && trimmed != "."
            && trimmed != ".."
            && !trimmed.contains(['/', '\\', '\0']);
        if !is_valid {
            return Err(PersistenceError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(format!("{}.{}", trimmed, self.extension)))
    }

    /// Writes the full game state under `name`.
    ///
    /// The document goes to a temporary sibling first and is renamed into place,
    /// so an earlier save with the same name is never left half-written.
    pub fn save(&self, name: &str, game: &Game) -> Result<PathBuf, PersistenceError> {
        let path = self.path_for(name)?;
        let json = protocol::to_json(&protocol::serialize(game))?;

        let tmp_path = path.with_extension(format!("{}.tmp", self.extension));
        fs::write(&tmp_path, json).map_err(|e| PersistenceError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::io(&path, e));
        }

        info!("Saved game {:?} ({} moves) to {}", name, game.move_count(), path.display());
        Ok(path)
    }

    /// Reads the save named `name` and rebuilds the game.
    pub fn load(&self, name: &str) -> Result<Game, PersistenceError> {
        let path = self.path_for(name)?;
        let json = fs::read_to_string(&path).map_err(|e| PersistenceError::io(&path, e))?;
        let doc: StateDocument = protocol::from_json(&json)?;
        let game = protocol::deserialize(&doc)?;
        info!("Loaded game {:?} ({} moves)", name, game.move_count());
        Ok(game)
    }

    /// Lists every readable save, sorted by name.
    ///
    /// Files that cannot be read or parsed are skipped with a warning.
    pub fn list(&self) -> Result<Vec<SaveSummary>, PersistenceError> {
        let entries = fs::read_dir(&self.root).map_err(|e| PersistenceError::io(&self.root, e))?;

        let mut saves: Vec<SaveSummary> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.has_save_extension(path))
            .filter_map(|path| match read_summary(&path) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!("Skipping unreadable save {}: {}", path.display(), e);
                    None
                }
            })
            .collect();
        saves.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("Found {} saves in {}", saves.len(), self.root.display());
        Ok(saves)
    }

    fn has_save_extension(&self, path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == self.extension.as_str())
    }
}

fn read_summary(path: &Path) -> Result<SaveSummary, PersistenceError> {
    let json = fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
    let header: SaveHeader = serde_json::from_str(&json)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SaveSummary {
        name,
        started_at: header.started_at,
        saved_at: header.saved_at,
        move_count: header.move_count,
    })
}
