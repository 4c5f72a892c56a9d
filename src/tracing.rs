//! Tracing setup and state-diff helpers
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=choices=debug` - choice list diffs only
//! - `RUST_LOG=quiz_author::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/quiz-author/logs/quiz-author.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Document;

/// Console filter for a `-v` count when RUST_LOG is unset
fn default_console_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing subscriber with console (stderr) and file logging
///
/// Console output respects RUST_LOG, falling back to a level derived
/// from `verbosity`. File logging writes debug level with daily rotation.
pub fn init(verbosity: u8) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_console_level(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "quiz-author.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the choice list for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOrderSnapshot {
    pub ids: Vec<String>,
    pub correct: Option<String>,
}

impl ChoiceOrderSnapshot {
    pub fn from_document(document: &Document) -> Self {
        Self {
            ids: document.choices().iter().map(|c| c.id.clone()).collect(),
            correct: document.correct().map(str::to_string),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &ChoiceOrderSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.ids != other.ids {
            changes.push(format!("order: [{}] → [{}]", self.ids.join(", "), other.ids.join(", ")));
        }
        if self.correct != other.correct {
            changes.push(format!(
                "correct: {} → {}",
                self.correct.as_deref().unwrap_or("-"),
                other.correct.as_deref().unwrap_or("-")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
