use super::{durability_warning, require_id, CommandContext};
use crate::cli::output::Report;
use crate::errors::Result;
use crate::favorites::{FavoriteStore, FavoritesStorage, StashId};

/// Mark a stash as favorite
pub fn mark<S: FavoritesStorage>(store: &mut FavoriteStore<S>, id: &StashId) -> Report {
    let durability = store.mark(id);
    Report::success(format!("Marked {id} as favorite")).warn(durability_warning(&durability))
}

/// Unmark a stash; an id that was never marked is reported, not treated as an error
pub fn unmark<S: FavoritesStorage>(store: &mut FavoriteStore<S>, id: &StashId) -> Report {
    match store.unmark(id) {
        Ok(durability) => Report::success(format!("Removed {id} from favorites"))
            .warn(durability_warning(&durability)),
        Err(not_favorite) => Report::info(not_favorite.to_string()),
    }
}

/// Flip the favorite flag of a stash
pub fn toggle<S: FavoritesStorage>(store: &mut FavoriteStore<S>, id: &StashId) -> Report {
    let (now_favorite, durability) = store.toggle(id);
    let message = if now_favorite {
        format!("Marked {id} as favorite")
    } else {
        format!("Removed {id} from favorites")
    };
    Report::success(message).warn(durability_warning(&durability))
}

pub async fn run_mark(ctx: &CommandContext, id: Option<String>) -> Result<()> {
    let id = require_id(id.as_deref())?;
    mark(&mut ctx.open_store(), &id).print(ctx.json)
}

pub async fn run_unmark(ctx: &CommandContext, id: Option<String>) -> Result<()> {
    let id = require_id(id.as_deref())?;
    unmark(&mut ctx.open_store(), &id).print(ctx.json)
}

pub async fn run_toggle(ctx: &CommandContext, id: Option<String>) -> Result<()> {
    let id = require_id(id.as_deref())?;
    toggle(&mut ctx.open_store(), &id).print(ctx.json)
}
