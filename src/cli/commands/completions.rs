use crate::cli::Cli;
use crate::errors::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Binary name completions are generated for
pub const BIN_NAME: &str = "favorite-stashes";

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
    Ok(())
}
