// SPDX-License-Identifier: MIT
//! The five remote capabilities of the assist service.
//!
//! Each endpoint is bound to a fixed URL path and a fixed set of
//! user-facing messages. All request bodies share one shape
//! (`{"code": <selection>}`); replies differ per endpoint and are
//! classified in [`crate::normalize`].

use std::fmt;

/// A fixed remote capability, known at startup, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Refactor,
    DetectAndFix,
    Suggest,
    Summarize,
    Complete,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Refactor,
        Endpoint::DetectAndFix,
        Endpoint::Suggest,
        Endpoint::Summarize,
        Endpoint::Complete,
    ];

    /// URL path on the assist service.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Refactor => "/refactor_code",
            Endpoint::DetectAndFix => "/error_detection_and_auto_fix",
            Endpoint::Suggest => "/refactor_suggestions",
            Endpoint::Summarize => "/summarize_code",
            Endpoint::Complete => "/complete_code",
        }
    }

    /// Short name used in logs and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Refactor => "refactor",
            Endpoint::DetectAndFix => "fix",
            Endpoint::Suggest => "suggest",
            Endpoint::Summarize => "summarize",
            Endpoint::Complete => "complete",
        }
    }

    /// Error shown when the command is invoked on an empty selection.
    pub fn select_prompt(self) -> &'static str {
        match self {
            Endpoint::Refactor => "Please select some code to refactor.",
            Endpoint::DetectAndFix => "Please select some code to detect errors.",
            Endpoint::Suggest => "Please select some code to get refactoring suggestions.",
            Endpoint::Summarize => "Please select some code to summarize.",
            Endpoint::Complete => "Please select some code to complete.",
        }
    }

    /// Info notice shown while the request is in flight.
    pub fn progress_notice(self) -> &'static str {
        match self {
            Endpoint::Refactor => "Sending code for refactoring...",
            Endpoint::DetectAndFix => "Sending code for error detection and auto-fixing...",
            Endpoint::Suggest => "Fetching refactoring suggestions...",
            Endpoint::Summarize => "Summarizing selected code...",
            Endpoint::Complete => "Sending code for completion...",
        }
    }

    /// Prefix for the error notice when the request itself fails.
    pub fn failure_label(self) -> &'static str {
        match self {
            Endpoint::Refactor => "Error in code refactoring",
            Endpoint::DetectAndFix => "Error with error detection and auto-fix service",
            Endpoint::Suggest => "Error fetching refactoring suggestions",
            Endpoint::Summarize => "Error in code summarization",
            Endpoint::Complete => "Error in code completion",
        }
    }

    /// Notice for a well-formed reply carrying no actionable payload.
    ///
    /// For every endpoint but DetectAndFix this is an error; an empty
    /// detect-and-fix reply means the service found nothing wrong, so
    /// [`crate::dispatch`] surfaces it as an info notice instead.
    pub fn empty_reply_notice(self) -> &'static str {
        match self {
            Endpoint::Refactor => "No refactored code returned.",
            Endpoint::DetectAndFix => "No errors found.",
            Endpoint::Suggest => "No suggestions returned.",
            Endpoint::Summarize => "No summary returned.",
            Endpoint::Complete => "No completed code returned.",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
