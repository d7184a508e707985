use crate::favorites::StashEntry;
use console::style;
use serde::Serialize;
use std::fmt::Display;

/// Marker shown in front of favorite stashes
pub const FAVORITE_MARKER: &str = "★";

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print an error message with X mark
    pub fn error<T: Display>(message: T) {
        println!("{} {}", style("✗").red(), message);
    }

    /// Print a warning message with warning emoji
    pub fn warning<T: Display>(message: T) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    /// Print an info message with info emoji
    pub fn info<T: Display>(message: T) {
        println!("{} {}", style("ℹ").cyan(), message);
    }

    /// Print a section header
    pub fn section<T: Display>(title: T) {
        println!("{}", style(title).bold());
    }

    /// Print one stash line, highlighting favorites
    pub fn stash_entry(entry: &StashEntry) {
        let line = format_stash(entry);
        if entry.is_favorite {
            println!("{}", style(line).yellow());
        } else {
            println!("{line}");
        }
    }

    /// Print any serializable value as pretty JSON
    pub fn json<T: Serialize>(value: &T) -> crate::errors::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// `★ stash@{N}: description` for favorites, two spaces instead of the star otherwise
pub fn format_stash(entry: &StashEntry) -> String {
    let marker = if entry.is_favorite {
        format!("{FAVORITE_MARKER} ")
    } else {
        "  ".to_string()
    };
    format!("{marker}{}: {}", entry.id, entry.description)
}

/// Outcome of a single user command, rendered as text or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip)]
    level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Failure,
}

impl Report {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self::with_level(Level::Success, true, message)
    }

    /// An expected negative outcome, e.g. unmarking a stash that was never marked
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self::with_level(Level::Info, false, message)
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self::with_level(Level::Failure, false, message)
    }

    fn with_level<S: Into<String>>(level: Level, success: bool, message: S) -> Self {
        Self {
            success,
            message: message.into(),
            warnings: Vec::new(),
            level,
        }
    }

    pub fn warn<S: Into<String>>(mut self, warning: Option<S>) -> Self {
        if let Some(warning) = warning {
            self.warnings.push(warning.into());
        }
        self
    }

    pub fn print(&self, json: bool) -> crate::errors::Result<()> {
        if json {
            return Output::json(self);
        }

        match self.level {
            Level::Success => Output::success(&self.message),
            Level::Info => Output::info(&self.message),
            Level::Failure => Output::error(&self.message),
        }
        for warning in &self.warnings {
            Output::warning(warning);
        }
        Ok(())
    }
}
