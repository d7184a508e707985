pub mod commands;
pub mod output;

use crate::config::{BackendKind, Settings};
use crate::errors::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::list::Listing;
use commands::stash::StashAction;
use commands::CommandContext;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "favorite-stashes")]
#[command(about = "Favorite Stashes - Manage your favorite Git stashes")]
#[command(version)]
#[command(after_help = "Examples:\n  favorite-stashes mark stash@{0}\n  favorite-stashes list\n  favorite-stashes favorites")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Favorites file (defaults to ~/.windsurf-favorite-stashes.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub favorites_file: Option<PathBuf>,

    /// Stash backend to use
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendKind>,

    /// Repository to operate on (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,
}

// Stash ids are optional at the parser level so a missing id is reported
// with our own usage error and exit code 1
#[derive(Subcommand)]
pub enum Commands {
    /// List all stashes with favorite status
    List,

    /// List only favorite stashes
    Favorites,

    /// Mark a stash as favorite
    Mark {
        /// Stash ID, e.g. stash@{0}
        id: Option<String>,
    },

    /// Unmark a stash as favorite
    Unmark {
        /// Stash ID, e.g. stash@{0}
        id: Option<String>,
    },

    /// Mark or unmark a stash depending on its current status
    Toggle {
        /// Stash ID, e.g. stash@{0}
        id: Option<String>,
    },

    /// Apply a stash
    Apply {
        /// Stash ID, e.g. stash@{0}
        id: Option<String>,
    },

    /// Pop a stash
    Pop {
        /// Stash ID, e.g. stash@{0}
        id: Option<String>,
    },

    /// Drop a stash
    Drop {
        /// Stash ID, e.g. stash@{0}
        id: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        let Some(command) = self.command else {
            Cli::command().print_help()?;
            return Ok(());
        };

        if let Commands::Completions { shell } = command {
            return commands::completions::generate_completions(shell);
        }

        let settings = Settings::resolve(self.favorites_file, self.backend, self.repo)?;
        let ctx = CommandContext::new(settings, self.json);

        match command {
            Commands::List => commands::list::run(&ctx, Listing::All).await,
            Commands::Favorites => commands::list::run(&ctx, Listing::Favorites).await,
            Commands::Mark { id } => commands::favorite::run_mark(&ctx, id).await,
            Commands::Unmark { id } => commands::favorite::run_unmark(&ctx, id).await,
            Commands::Toggle { id } => commands::favorite::run_toggle(&ctx, id).await,
            Commands::Apply { id } => commands::stash::run(&ctx, StashAction::Apply, id).await,
            Commands::Pop { id } => commands::stash::run(&ctx, StashAction::Pop, id).await,
            Commands::Drop { id } => commands::stash::run(&ctx, StashAction::Drop, id).await,
            Commands::Completions { shell } => commands::completions::generate_completions(shell),
        }
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        // Logs go to stderr so --json output on stdout stays parseable
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);

        if self.no_color {
            console::set_colors_enabled(false);
            let _ = subscriber.with_ansi(false).try_init();
        } else {
            let _ = subscriber.try_init();
        }
    }
}
