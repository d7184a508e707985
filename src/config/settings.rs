use super::{default_favorites_file, BACKEND_ENV, FAVORITES_FILE_ENV};
use crate::errors::{FavoritesError, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which implementation talks to git
///
/// Defaults to the `git` executable. libgit2 rejects applying a stash while
/// the index has staged changes, which `git stash apply` allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// In-process libgit2
    Libgit2,
    /// The `git` executable on PATH
    #[default]
    Cli,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Libgit2 => write!(f, "libgit2"),
            BackendKind::Cli => write!(f, "cli"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "libgit2" | "git2" => Ok(BackendKind::Libgit2),
            "cli" | "git" => Ok(BackendKind::Cli),
            other => Err(FavoritesError::config(format!(
                "Unknown backend '{other}'. Valid options: libgit2, cli"
            ))),
        }
    }
}

/// Per-process settings, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where favorite flags are persisted
    pub favorites_file: PathBuf,
    /// Stash backend implementation
    pub backend: BackendKind,
    /// Directory to discover the repository from (current directory when unset)
    pub repo_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings: explicit values win, then environment, then defaults
    pub fn resolve(
        favorites_file: Option<PathBuf>,
        backend: Option<BackendKind>,
        repo_path: Option<PathBuf>,
    ) -> Result<Self> {
        let favorites_file = match favorites_file {
            Some(path) => path,
            None => match env_value(FAVORITES_FILE_ENV) {
                Some(path) => PathBuf::from(path),
                None => default_favorites_file()?,
            },
        };

        let backend = match backend {
            Some(kind) => kind,
            None => match env_value(BACKEND_ENV) {
                Some(value) => value.parse()?,
                None => BackendKind::default(),
            },
        };

        let settings = Self {
            favorites_file,
            backend,
            repo_path,
        };
        tracing::debug!("Resolved settings: {settings:?}");
        Ok(settings)
    }
}

/// Non-empty environment variable value
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
