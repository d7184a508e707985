use super::{durability_warning, require_id, CommandContext};
use crate::cli::output::Report;
use crate::errors::Result;
use crate::favorites::{FavoritesManager, FavoritesStorage, StashId};
use crate::git::StashBackend;

/// Operations that go through the version-control backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashAction {
    Apply,
    Pop,
    Drop,
}

impl StashAction {
    pub fn verb(&self) -> &'static str {
        match self {
            StashAction::Apply => "apply",
            StashAction::Pop => "pop",
            StashAction::Drop => "drop",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            StashAction::Apply => "Applied",
            StashAction::Pop => "Popped",
            StashAction::Drop => "Dropped",
        }
    }
}

/// Run `action` on `id`; backend failures become a failed report, never an error
pub fn execute<B: StashBackend, S: FavoritesStorage>(
    manager: &mut FavoritesManager<B, S>,
    action: StashAction,
    id: &StashId,
) -> Report {
    let result = match action {
        StashAction::Apply => manager.apply(id).map(|()| None),
        StashAction::Pop => manager.pop(id).map(Some),
        StashAction::Drop => manager.drop_stash(id).map(Some),
    };

    match result {
        Ok(durability) => Report::success(format!("{} {id}", action.past_tense()))
            .warn(durability.as_ref().and_then(durability_warning)),
        Err(e) => Report::failure(format!("Failed to {} {id}: {e}", action.verb())),
    }
}

pub async fn run(ctx: &CommandContext, action: StashAction, id: Option<String>) -> Result<()> {
    let id = require_id(id.as_deref())?;

    let report = match ctx.open_manager() {
        Ok(mut manager) => execute(&mut manager, action, &id),
        Err(e) => Report::failure(format!("Failed to {} {id}: {e}", action.verb())),
    };

    report.print(ctx.json)
}
