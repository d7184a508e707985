pub mod completions;
pub mod favorite;
pub mod list;
pub mod stash;

use crate::config::Settings;
use crate::errors::{FavoritesError, Result};
use crate::favorites::{Durability, FavoriteStore, FavoritesManager, FileStorage, StashId};
use crate::git::{open_backend, StashBackend};

/// Usage error shown when a command needs a stash id
pub const MISSING_ID: &str = "Please provide a stash ID (e.g., stash@{0})";

/// Everything a command needs from the process: resolved settings and output mode
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    pub json: bool,
}

impl CommandContext {
    pub fn new(settings: Settings, json: bool) -> Self {
        Self { settings, json }
    }

    /// Favorites only; does not need a repository
    pub fn open_store(&self) -> FavoriteStore<FileStorage> {
        FavoriteStore::load(FileStorage::new(&self.settings.favorites_file))
    }

    /// Favorites reconciled against the repository's stash list
    pub fn open_manager(&self) -> Result<FavoritesManager<Box<dyn StashBackend>, FileStorage>> {
        let backend = open_backend(&self.settings)?;
        Ok(FavoritesManager::new(
            backend,
            FileStorage::new(&self.settings.favorites_file),
        ))
    }
}

/// Parse the required stash id argument
pub fn require_id(id: Option<&str>) -> Result<StashId> {
    let raw = id.ok_or_else(|| FavoritesError::validation(MISSING_ID))?;
    raw.parse()
        .map_err(|e| FavoritesError::validation(format!("{e}. {MISSING_ID}")))
}

/// Warning text for a mutation whose write failed
pub fn durability_warning(durability: &Durability) -> Option<String> {
    durability
        .write_error()
        .map(|e| format!("Favorites were updated for this session but could not be saved: {e}"))
}
