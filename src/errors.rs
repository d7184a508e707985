use crate::favorites::StashId;

/// Favorite Stashes Error Types
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// libgit2 errors that are not tied to a stash operation
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Failures reported by the version-control backend, message kept verbatim
    #[error("{0}")]
    Backend(String),

    /// Configuration and favorites file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FavoritesError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FavoritesError::Config(msg.into())
    }

    pub fn backend<S: Into<String>>(msg: S) -> Self {
        FavoritesError::Backend(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        FavoritesError::Validation(msg.into())
    }

    /// Whether this error came from the version-control backend
    pub fn is_backend(&self) -> bool {
        matches!(self, FavoritesError::Backend(_) | FavoritesError::Git(_))
    }
}

/// Returned by `unmark` when the id carries no favorite flag.
///
/// This is an expected outcome, not a fault, so it lives outside [`FavoritesError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{id} is not marked as favorite")]
pub struct NotFavorite {
    pub id: StashId,
}

pub type Result<T> = std::result::Result<T, FavoritesError>;
