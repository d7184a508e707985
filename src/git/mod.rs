pub mod command;
pub mod repository;

pub use command::GitCommand;
pub use repository::GitRepository;

use crate::config::{BackendKind, Settings};
use crate::errors::{FavoritesError, Result};
use crate::favorites::StashId;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One live stash as reported by the version-control backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StashRecord {
    pub ordinal: usize,
    pub description: String,
    /// Stash commit id, when the backend exposes it
    pub commit: Option<String>,
}

impl StashRecord {
    pub fn new(ordinal: usize, description: impl Into<String>) -> Self {
        Self {
            ordinal,
            description: description.into(),
            commit: None,
        }
    }

    pub fn id(&self) -> StashId {
        StashId::new(self.ordinal)
    }
}

/// The version-control operations the favorites manager needs
///
/// Failures carry the backend's own message in [`FavoritesError::Backend`].
pub trait StashBackend {
    /// Live stashes, newest first
    fn list_stashes(&mut self) -> Result<Vec<StashRecord>>;

    fn apply(&mut self, id: &StashId) -> Result<()>;

    fn pop(&mut self, id: &StashId) -> Result<()>;

    fn drop_stash(&mut self, id: &StashId) -> Result<()>;
}

impl<B: StashBackend + ?Sized> StashBackend for Box<B> {
    fn list_stashes(&mut self) -> Result<Vec<StashRecord>> {
        (**self).list_stashes()
    }

    fn apply(&mut self, id: &StashId) -> Result<()> {
        (**self).apply(id)
    }

    fn pop(&mut self, id: &StashId) -> Result<()> {
        (**self).pop(id)
    }

    fn drop_stash(&mut self, id: &StashId) -> Result<()> {
        (**self).drop_stash(id)
    }
}

/// Parse one `git stash list` line of the form `stash@{N}: description`
pub fn parse_stash_line(line: &str) -> Option<StashRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (selector, description) = line.split_once(": ")?;
    if !selector.starts_with("stash@{") {
        return None;
    }
    let id: StashId = selector.parse().ok()?;
    Some(StashRecord::new(id.ordinal(), description))
}

/// Parse `git stash list` output, skipping blank and malformed lines
pub fn parse_stash_list(output: &str) -> Vec<StashRecord> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = parse_stash_line(line);
            if record.is_none() {
                tracing::debug!("Skipping unparseable stash line: {line}");
            }
            record
        })
        .collect()
}

/// Find the root of the Git repository
pub fn find_repository_root(start_path: &Path) -> Result<PathBuf> {
    let repo = git2::Repository::discover(start_path)
        .map_err(|e| FavoritesError::config(format!("Not a git repository: {}", e.message())))?;

    let workdir = repo
        .workdir()
        .ok_or_else(|| FavoritesError::config("Repository has no working directory (bare repo?)"))?;

    Ok(workdir.to_path_buf())
}

/// Open the backend selected in `settings`
pub fn open_backend(settings: &Settings) -> Result<Box<dyn StashBackend>> {
    let start = match &settings.repo_path {
        Some(path) => path.clone(),
        None => std::env::current_dir()
            .map_err(|e| FavoritesError::config(format!("Could not get current directory: {e}")))?,
    };
    let root = find_repository_root(&start)?;

    tracing::debug!("Using {} backend for {}", settings.backend, root.display());

    Ok(match settings.backend {
        BackendKind::Libgit2 => Box::new(GitRepository::open(&root)?),
        BackendKind::Cli => Box::new(GitCommand::new(root)),
    })
}
