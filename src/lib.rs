pub mod cli;
pub mod config;
pub mod errors;
pub mod favorites;
pub mod git;
pub mod utils;

pub use errors::{FavoritesError, NotFavorite};
pub use favorites::{FavoritesManager, StashEntry, StashId};
