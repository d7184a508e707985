use crate::errors::{FavoritesError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "stash@{";
const SUFFIX: &str = "}";

/// Ordinal identity of a stash, rendered as `stash@{N}`.
///
/// `N` is the position in the live stash list with 0 being the newest entry.
/// The identity is positional: popping or dropping an entry below it shifts
/// every later entry down by one, so the same id can name different content
/// across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StashId(usize);

impl StashId {
    pub fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    pub fn ordinal(&self) -> usize {
        self.0
    }
}

impl fmt::Display for StashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}{SUFFIX}", self.0)
    }
}

impl FromStr for StashId {
    type Err = FavoritesError;

    /// Accepts `stash@{N}` or, as git does, a bare `N`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FavoritesError::validation(format!(
                "Invalid stash ID '{s}' (expected e.g. stash@{{0}})"
            )));
        }

        digits
            .parse::<usize>()
            .map(StashId)
            .map_err(|e| FavoritesError::validation(format!("Invalid stash ID '{s}': {e}")))
    }
}

impl Serialize for StashId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
