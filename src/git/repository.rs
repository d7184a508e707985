use super::{StashBackend, StashRecord};
use crate::errors::{FavoritesError, Result};
use crate::favorites::StashId;
use git2::{Repository, StashApplyOptions};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository exposing the stash operations
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open a Git repository at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| FavoritesError::config(format!("Not a git repository: {}", e.message())))?;

        if repo.is_bare() {
            return Err(FavoritesError::config("Repository has no working directory"));
        }

        Ok(Self { repo })
    }

    fn backend_error(action: &str, id: &StashId, e: git2::Error) -> FavoritesError {
        debug!("libgit2 failed to {action} {id}: {e}");
        FavoritesError::backend(e.message())
    }
}

impl StashBackend for GitRepository {
    fn list_stashes(&mut self) -> Result<Vec<StashRecord>> {
        let mut stashes = Vec::new();

        self.repo
            .stash_foreach(|index, message, oid| {
                stashes.push(StashRecord {
                    ordinal: index,
                    description: message.to_string(),
                    commit: Some(oid.to_string()),
                });
                true
            })
            .map_err(|e| FavoritesError::backend(e.message()))?;

        Ok(stashes)
    }

    fn apply(&mut self, id: &StashId) -> Result<()> {
        let mut options = StashApplyOptions::new();
        self.repo
            .stash_apply(id.ordinal(), Some(&mut options))
            .map_err(|e| Self::backend_error("apply", id, e))
    }

    fn pop(&mut self, id: &StashId) -> Result<()> {
        let mut options = StashApplyOptions::new();
        self.repo
            .stash_pop(id.ordinal(), Some(&mut options))
            .map_err(|e| Self::backend_error("pop", id, e))
    }

    fn drop_stash(&mut self, id: &StashId) -> Result<()> {
        self.repo
            .stash_drop(id.ordinal())
            .map_err(|e| Self::backend_error("drop", id, e))
    }
}
