pub mod settings;

pub use settings::{BackendKind, Settings};

use crate::errors::{FavoritesError, Result};
use std::path::PathBuf;

/// File name of the favorites document inside the home directory
pub const FAVORITES_FILE_NAME: &str = ".windsurf-favorite-stashes.json";

/// Overrides the favorites file location
pub const FAVORITES_FILE_ENV: &str = "FAVORITE_STASHES_FILE";

/// Selects the stash backend (`libgit2` or `cli`)
pub const BACKEND_ENV: &str = "FAVORITE_STASHES_BACKEND";

/// Get the default favorites file (~/.windsurf-favorite-stashes.json)
pub fn default_favorites_file() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| FavoritesError::config("Could not find home directory"))?;
    Ok(home_dir.join(FAVORITES_FILE_NAME))
}
