pub mod id;
pub mod manager;
pub mod store;

pub use id::StashId;
pub use manager::{FavoritesManager, StashEntry};
pub use store::{Durability, FavoriteStore, FavoritesFile, FavoritesStorage, FileStorage};
