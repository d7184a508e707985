use super::{parse_stash_list, StashBackend, StashRecord};
use crate::errors::{FavoritesError, Result};
use crate::favorites::StashId;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Stash backend that shells out to the `git` binary
///
/// Uses the user's own git, hooks and configuration, and reports git's
/// stderr verbatim on failure.
pub struct GitCommand {
    workdir: PathBuf,
}

impl GitCommand {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| FavoritesError::backend(format!("Failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(FavoritesError::backend(message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn stash(&self, action: &str, id: &StashId) -> Result<()> {
        let selector = id.to_string();
        self.run(&["stash", action, &selector]).map(|_| ())
    }
}

impl StashBackend for GitCommand {
    fn list_stashes(&mut self) -> Result<Vec<StashRecord>> {
        let output = self.run(&["stash", "list"])?;
        Ok(parse_stash_list(&output))
    }

    fn apply(&mut self, id: &StashId) -> Result<()> {
        self.stash("apply", id)
    }

    fn pop(&mut self, id: &StashId) -> Result<()> {
        self.stash("pop", id)
    }

    fn drop_stash(&mut self, id: &StashId) -> Result<()> {
        self.stash("drop", id)
    }
}
