use super::CommandContext;
use crate::cli::output::{Output, FAVORITE_MARKER};
use crate::errors::Result;
use crate::favorites::{FavoritesManager, FavoritesStorage, StashEntry};
use crate::git::StashBackend;

/// Which part of the read model to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    Favorites,
}

/// Fetch the entries for `listing`
pub fn collect<B: StashBackend, S: FavoritesStorage>(
    manager: &mut FavoritesManager<B, S>,
    listing: Listing,
) -> Result<Vec<StashEntry>> {
    match listing {
        Listing::All => manager.list_all(),
        Listing::Favorites => manager.list_favorites(),
    }
}

/// List stashes; a backend failure is printed and treated as "no stashes visible"
///
/// With `--json` the failure is returned instead so callers get a non-zero exit.
pub async fn run(ctx: &CommandContext, listing: Listing) -> Result<()> {
    let result = ctx
        .open_manager()
        .and_then(|mut manager| collect(&mut manager, listing));

    match result {
        Ok(entries) if ctx.json => Output::json(&entries),
        Ok(entries) => {
            print_entries(&entries, listing);
            Ok(())
        }
        Err(e) if ctx.json => Err(e),
        Err(e) => {
            Output::error(format!("Error getting stashes: {e}"));
            Ok(())
        }
    }
}

fn print_entries(entries: &[StashEntry], listing: Listing) {
    match listing {
        Listing::All => {
            Output::section(format!("All stashes ({FAVORITE_MARKER} = favorite):"));
            for entry in entries {
                Output::stash_entry(entry);
            }
        }
        Listing::Favorites if entries.is_empty() => {
            Output::info("No favorite stashes found.");
        }
        Listing::Favorites => {
            Output::section("Favorite stashes:");
            for entry in entries {
                Output::stash_entry(entry);
            }
        }
    }
}
