use super::store::{Durability, FavoriteStore, FavoritesStorage};
use super::StashId;
use crate::errors::{NotFavorite, Result};
use crate::git::{StashBackend, StashRecord};
use serde::Serialize;
use tracing::debug;

/// A live stash annotated with its favorite flag
///
/// Rebuilt on every query; only the flag outlives the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StashEntry {
    pub id: StashId,
    pub index: usize,
    pub description: String,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Session context reconciling the live stash list with persisted favorites
///
/// The backend is authoritative for which stashes exist; the store is
/// authoritative for which ids are flagged.
pub struct FavoritesManager<B: StashBackend, S: FavoritesStorage> {
    backend: B,
    store: FavoriteStore<S>,
}

impl<B: StashBackend, S: FavoritesStorage> FavoritesManager<B, S> {
    /// Create a manager, loading favorites from `storage`
    pub fn new(backend: B, storage: S) -> Self {
        Self::with_store(backend, FavoriteStore::load(storage))
    }

    pub fn with_store(backend: B, store: FavoriteStore<S>) -> Self {
        Self { backend, store }
    }

    /// All live stashes in backend order, each flagged
    pub fn list_all(&mut self) -> Result<Vec<StashEntry>> {
        let records = self.backend.list_stashes()?;
        debug!("Backend reported {} stash(es)", records.len());
        Ok(records
            .into_iter()
            .map(|record| self.reconcile(record))
            .collect())
    }

    /// Live stashes that are flagged, in backend order
    pub fn list_favorites(&mut self) -> Result<Vec<StashEntry>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|entry| entry.is_favorite)
            .collect())
    }

    pub fn is_favorite(&self, id: &StashId) -> bool {
        self.store.is_favorite(id)
    }

    pub fn mark(&mut self, id: &StashId) -> Durability {
        self.store.mark(id)
    }

    pub fn unmark(&mut self, id: &StashId) -> std::result::Result<Durability, NotFavorite> {
        self.store.unmark(id)
    }

    pub fn toggle(&mut self, id: &StashId) -> (bool, Durability) {
        self.store.toggle(id)
    }

    /// Apply a stash; favorites are untouched whatever the outcome
    pub fn apply(&mut self, id: &StashId) -> Result<()> {
        self.backend.apply(id)
    }

    /// Pop a stash and evict its favorite flag once the backend succeeded
    pub fn pop(&mut self, id: &StashId) -> Result<Durability> {
        self.backend.pop(id)?;
        Ok(self.store.evict(id))
    }

    /// Drop a stash and evict its favorite flag once the backend succeeded
    pub fn drop_stash(&mut self, id: &StashId) -> Result<Durability> {
        self.backend.drop_stash(id)?;
        Ok(self.store.evict(id))
    }

    pub fn store(&self) -> &FavoriteStore<S> {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn reconcile(&self, record: StashRecord) -> StashEntry {
        let id = record.id();
        StashEntry {
            id,
            index: record.ordinal,
            description: record.description,
            is_favorite: self.store.is_favorite(&id),
            commit: record.commit,
        }
    }
}
