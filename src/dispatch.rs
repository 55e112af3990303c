// SPDX-License-Identifier: MIT
//! Action dispatch — decide the single editor-visible effect for a
//! normalized result, then execute it against the host.
//!
//! `dispatch` is a pure decision; `execute` performs the side effect.
//! Per invocation exactly one of {mutate document, show notices}
//! happens, and the only mutation gated by interactive confirmation is
//! the detect-and-fix replacement.

use anyhow::Result;

use crate::chunk::split_text;
use crate::endpoint::Endpoint;
use crate::host::EditorHost;
use crate::normalize::{NormalizedResult, SuggestionPayload};

/// Display surfaces truncate long notices; suggestion text is split
/// into pieces of at most this many characters.
pub const MAX_NOTICE_CHARS: usize = 1000;

const CONFIRM_PROMPT: &str = "Would you like to auto-fix the code?";
const CONFIRM_OPTIONS: [&str; 2] = ["Yes", "No"];

// ─── Action ───────────────────────────────────────────────────────────────────

/// The editor effect chosen for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the selection unconditionally and atomically, then
    /// confirm with a success notice.
    ReplaceSelection {
        text: String,
        done_notice: &'static str,
    },
    /// Replace the selection only after the user explicitly accepts;
    /// decline or dismissal leaves the document untouched.
    ReplaceSelectionWithConfirmation { text: String },
    /// Show each message as its own info notice, in order.
    ShowInfo(Vec<String>),
    ShowError(String),
}

// ─── Dispatch (pure) ──────────────────────────────────────────────────────────

/// Map a normalized result to the editor action for its endpoint.
pub fn dispatch(endpoint: Endpoint, result: NormalizedResult) -> Action {
    match result {
        NormalizedResult::RefactoredCode(text) => Action::ReplaceSelection {
            text,
            done_notice: "Code refactored successfully!",
        },
        NormalizedResult::CompletedCode(text) => Action::ReplaceSelection {
            text,
            done_notice: "Code completed successfully!",
        },
        NormalizedResult::FixedCode(text) => Action::ReplaceSelectionWithConfirmation { text },
        NormalizedResult::Summary(text) => Action::ShowInfo(vec![format!("Summary: {text}")]),
        NormalizedResult::DetectedError(message) => {
            Action::ShowError(format!("Error Detected: {message}"))
        }
        NormalizedResult::Suggestions(SuggestionPayload::List(items)) => {
            if items.is_empty() {
                Action::ShowError("No suggestions returned.".to_string())
            } else {
                Action::ShowInfo(vec![format_suggestion_list(&items)])
            }
        }
        NormalizedResult::Suggestions(SuggestionPayload::Single(text)) => Action::ShowInfo(
            split_text(&text, MAX_NOTICE_CHARS)
                .iter()
                .map(|piece| format!("**Refactoring Suggestion:**\n{piece}"))
                .collect(),
        ),
        NormalizedResult::Suggestions(SuggestionPayload::Keyed(entries)) => {
            Action::ShowInfo(vec![format_keyed_suggestions(&entries)])
        }
        NormalizedResult::Unrecognized(description) => {
            Action::ShowError(format!("Unexpected response format: {description}."))
        }
        NormalizedResult::Empty => match endpoint {
            // An empty detect-and-fix reply is good news, not a failure.
            Endpoint::DetectAndFix => {
                Action::ShowInfo(vec![endpoint.empty_reply_notice().to_string()])
            }
            other => Action::ShowError(other.empty_reply_notice().to_string()),
        },
    }
}

/// One concatenated payload; each suggestion is chunked and its pieces
/// labeled `Suggestion {item}.{piece}`.
fn format_suggestion_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            split_text(suggestion, MAX_NOTICE_CHARS)
                .iter()
                .enumerate()
                .map(|(j, piece)| format!("**Suggestion {}.{}:**\n{}\n", i + 1, j + 1, piece))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One concatenated payload with a `**key**:` heading per entry, keys
/// in the order they arrived.
fn format_keyed_suggestions(entries: &[(String, String)]) -> String {
    let mut out = String::from("**Refactoring Suggestions (Object):**\n");
    for (key, value) in entries {
        out.push_str(&format!("\n**{key}:**\n"));
        for piece in split_text(value, MAX_NOTICE_CHARS) {
            out.push_str(&piece);
            out.push('\n');
        }
    }
    out
}

// ─── Execute (side-effecting) ─────────────────────────────────────────────────

/// Carry out the chosen action against the editor host.
pub async fn execute(action: Action, host: &dyn EditorHost) -> Result<()> {
    match action {
        Action::ReplaceSelection { text, done_notice } => {
            host.replace_selection(&text).await?;
            host.show_info(done_notice);
        }
        Action::ReplaceSelectionWithConfirmation { text } => {
            match host.confirm(CONFIRM_PROMPT, &CONFIRM_OPTIONS).await {
                Some(choice) if choice == "Yes" => {
                    host.replace_selection(&text).await?;
                    host.show_info("Code has been auto-fixed!");
                }
                // "No" or dismissed — leave the document alone.
                _ => host.show_info("No changes made."),
            }
        }
        Action::ShowInfo(messages) => {
            for message in &messages {
                host.show_info(message);
            }
        }
        Action::ShowError(message) => host.show_error(&message),
    }
    Ok(())
}
