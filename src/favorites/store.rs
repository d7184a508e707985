use super::StashId;
use crate::errors::{FavoritesError, NotFavorite, Result};
use crate::utils::atomic_file;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Raw byte persistence for the favorites document
pub trait FavoritesStorage {
    /// Read the persisted document, `None` when nothing has been saved yet
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the persisted document
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Favorites document stored at a fixed path on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesStorage for FileStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FavoritesError::config(format!(
                "Failed to read favorites file {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        atomic_file::write_bytes(&self.path, bytes)
    }
}

/// On-disk shape: `{ "stashes": { "stash@{N}": true } }`
///
/// Unknown top-level fields are accepted on read and dropped on the next write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesFile {
    #[serde(default)]
    pub stashes: BTreeMap<String, bool>,
}

/// What happened to the favorites file after a mutation
#[must_use]
#[derive(Debug)]
pub enum Durability {
    /// The whole set was written out
    Persisted,
    /// Nothing changed, so nothing was written
    Unchanged,
    /// The write failed; the in-memory set is still authoritative for this session
    NotPersisted(FavoritesError),
}

impl Durability {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Durability::Persisted)
    }

    /// The write failure to surface as a warning, if any
    pub fn write_error(&self) -> Option<&FavoritesError> {
        match self {
            Durability::NotPersisted(e) => Some(e),
            _ => None,
        }
    }
}

/// Owns the favorite flags for the lifetime of a session
///
/// Every mutation flushes the complete set to storage before returning.
pub struct FavoriteStore<S: FavoritesStorage> {
    storage: S,
    favorites: FavoritesFile,
}

impl<S: FavoritesStorage> FavoriteStore<S> {
    /// Load the persisted set; absent, unreadable or malformed data yields an empty set
    pub fn load(storage: S) -> Self {
        let favorites = match storage.read() {
            Ok(Some(bytes)) => match serde_json::from_slice::<FavoritesFile>(&bytes) {
                Ok(file) => normalize(file),
                Err(e) => {
                    warn!("Ignoring malformed favorites file: {e}");
                    FavoritesFile::default()
                }
            },
            Ok(None) => FavoritesFile::default(),
            Err(e) => {
                warn!("Could not load favorite stashes: {e}");
                FavoritesFile::default()
            }
        };

        debug!("Loaded {} favorite stash(es)", favorites.stashes.len());
        Self { storage, favorites }
    }

    pub fn is_favorite(&self, id: &StashId) -> bool {
        self.favorites
            .stashes
            .get(&id.to_string())
            .copied()
            .unwrap_or(false)
    }

    /// Mark `id` as favorite; writes even when it already was one
    pub fn mark(&mut self, id: &StashId) -> Durability {
        self.favorites.stashes.insert(id.to_string(), true);
        self.save()
    }

    /// Remove the favorite flag from `id`
    pub fn unmark(&mut self, id: &StashId) -> std::result::Result<Durability, NotFavorite> {
        if self.favorites.stashes.remove(&id.to_string()).is_some() {
            Ok(self.save())
        } else {
            Err(NotFavorite { id: *id })
        }
    }

    /// Flip the flag on `id`, returning the new state
    pub fn toggle(&mut self, id: &StashId) -> (bool, Durability) {
        if self.is_favorite(id) {
            self.favorites.stashes.remove(&id.to_string());
            (false, self.save())
        } else {
            (true, self.mark(id))
        }
    }

    /// Drop the flag of a stash that no longer exists; silent when absent
    pub fn evict(&mut self, id: &StashId) -> Durability {
        if self.favorites.stashes.remove(&id.to_string()).is_some() {
            debug!("Evicted {id} from favorites");
            self.save()
        } else {
            Durability::Unchanged
        }
    }

    /// Persisted favorite keys in sorted order
    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorites.stashes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.favorites.stashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.stashes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn save(&mut self) -> Durability {
        let result = serde_json::to_vec_pretty(&self.favorites)
            .map_err(FavoritesError::from)
            .and_then(|bytes| self.storage.write(&bytes));

        match result {
            Ok(()) => Durability::Persisted,
            Err(e) => {
                warn!("Error saving favorite stashes: {e}");
                Durability::NotPersisted(e)
            }
        }
    }
}

/// Keep only explicit `true` marks and rewrite keys like `0` as `stash@{0}`
///
/// Keys that are not stash ids are kept verbatim so they survive the next write.
fn normalize(file: FavoritesFile) -> FavoritesFile {
    let stashes = file
        .stashes
        .into_iter()
        .filter(|(_, favorite)| *favorite)
        .map(|(key, favorite)| match key.parse::<StashId>() {
            Ok(id) => (id.to_string(), favorite),
            Err(_) => {
                debug!("Keeping unrecognized favorite key '{key}'");
                (key, favorite)
            }
        })
        .collect();
    FavoritesFile { stashes }
}
