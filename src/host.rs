// SPDX-License-Identifier: MIT
//! Editor host abstraction.
//!
//! The core never talks to an editor directly; it goes through
//! [`EditorHost`] so the same command logic serves an extension
//! bridge, the console binary, and the test doubles.

use anyhow::Result;
use async_trait::async_trait;

/// The editor-side contract consumed by the command core.
///
/// Implementations own the document and the notification surface; the
/// core assumes `replace_selection` applies the whole edit atomically.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Current selection text, or `None` when no document is active.
    /// An empty string is a valid (but unusable) selection.
    fn active_selection(&self) -> Option<String>;

    /// Replace the active selection with `text` in one edit.
    async fn replace_selection(&self, text: &str) -> Result<()>;

    fn show_info(&self, message: &str);

    fn show_error(&self, message: &str);

    /// Ask the user to pick one of `options`. `None` means dismissed.
    async fn confirm(&self, prompt: &str, options: &[&str]) -> Option<String>;
}

// ─── Console host ─────────────────────────────────────────────────────────────

/// Host adapter for the `mori` binary.
///
/// The "selection" is whatever arrived on stdin; replacements go to
/// stdout so the command composes in a pipeline, and notices go to
/// stderr. Confirmation is non-interactive: the `--yes` flag accepts,
/// anything else counts as dismissed.
pub struct ConsoleHost {
    selection: Option<String>,
    assume_yes: bool,
}

impl ConsoleHost {
    pub fn new(selection: Option<String>, assume_yes: bool) -> Self {
        Self {
            selection,
            assume_yes,
        }
    }
}

#[async_trait]
impl EditorHost for ConsoleHost {
    fn active_selection(&self) -> Option<String> {
        self.selection.clone()
    }

    async fn replace_selection(&self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }

    fn show_info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    async fn confirm(&self, prompt: &str, options: &[&str]) -> Option<String> {
        if self.assume_yes {
            return options.first().map(|choice| choice.to_string());
        }
        eprintln!("{prompt} [{}] (re-run with --yes to accept)", options.join("/"));
        None
    }
}
