use crate::errors::{FavoritesError, Result};
use std::fs;
use std::path::Path;

/// Whole-file writes that never leave a half-written favorites file behind
pub mod atomic_file {
    use super::*;
    use std::path::PathBuf;

    /// Write binary data to a file atomically using a temporary file + rename strategy
    ///
    /// A symlinked `path` is written through to its target and the link is kept.
    /// No lock is taken: concurrent writers race and the last rename wins.
    pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
        let target = resolve_symlink(path);

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    FavoritesError::config(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        // Temporary file lives next to the target so the rename stays on one filesystem
        let temp_path = target.with_extension("tmp");

        fs::write(&temp_path, data)
            .map_err(|e| FavoritesError::config(format!("Failed to write temporary file: {e}")))?;

        fs::rename(&temp_path, &target).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            FavoritesError::config(format!("Failed to finalize file write: {e}"))
        })
    }

    /// The file a symlink points at, or `path` itself when it is not a link
    fn resolve_symlink(path: &Path) -> PathBuf {
        let is_link = fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if !is_link {
            return path.to_path_buf();
        }

        if let Ok(target) = fs::canonicalize(path) {
            return target;
        }

        // Dangling link: relative targets are relative to the link's directory
        match fs::read_link(path) {
            Ok(link) => match path.parent() {
                Some(parent) => parent.join(link),
                None => link,
            },
            Err(_) => path.to_path_buf(),
        }
    }
}
