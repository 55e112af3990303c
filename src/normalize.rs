// SPDX-License-Identifier: MIT
//! Reply normalization — one untyped service reply in, one closed
//! tagged result out.
//!
//! The assist service is loosely typed: each endpoint returns a JSON
//! object whose payload field varies in shape, and the `suggestions`
//! field in particular may be an array, a plain string, or an object.
//! All shape inspection happens here, once, immediately after
//! transport; everything downstream matches exhaustively over
//! [`NormalizedResult`] and never touches raw JSON again.
//!
//! Normalization never fails: unrecognized shapes become an explicit
//! [`NormalizedResult::Unrecognized`] value naming what was found.

use serde_json::Value;

use crate::endpoint::Endpoint;

// ─── Result types ─────────────────────────────────────────────────────────────

/// The runtime shape the `suggestions` field arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPayload {
    /// Ordered sequence of suggestion texts. May be empty; dispatch
    /// reports an empty list as a no-suggestions failure.
    List(Vec<String>),
    /// One suggestion as a bare string.
    Single(String),
    /// Label → text entries, in the order the service sent them.
    Keyed(Vec<(String, String)>),
}

/// A service reply reduced to exactly one actionable variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedResult {
    RefactoredCode(String),
    FixedCode(String),
    CompletedCode(String),
    Summary(String),
    Suggestions(SuggestionPayload),
    /// The service's own judgment that the selected code is faulty —
    /// information about the input, not a system fault.
    DetectedError(String),
    /// Well-formed JSON whose payload shape is not recognized for the
    /// endpoint. Carries a description of what was found.
    Unrecognized(String),
    /// Well-formed reply with no actionable payload.
    Empty,
}

impl NormalizedResult {
    /// Variant name for logging. Never includes payload content.
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizedResult::RefactoredCode(_) => "refactored_code",
            NormalizedResult::FixedCode(_) => "fixed_code",
            NormalizedResult::CompletedCode(_) => "completed_code",
            NormalizedResult::Summary(_) => "summary",
            NormalizedResult::Suggestions(SuggestionPayload::List(_)) => "suggestion_list",
            NormalizedResult::Suggestions(SuggestionPayload::Single(_)) => "suggestion_single",
            NormalizedResult::Suggestions(SuggestionPayload::Keyed(_)) => "suggestion_keyed",
            NormalizedResult::DetectedError(_) => "detected_error",
            NormalizedResult::Unrecognized(_) => "unrecognized",
            NormalizedResult::Empty => "empty",
        }
    }
}

// ─── Normalization ────────────────────────────────────────────────────────────

/// Classify a decoded service reply for the given endpoint.
pub fn normalize(endpoint: Endpoint, reply: &Value) -> NormalizedResult {
    match endpoint {
        Endpoint::Refactor => match text_field(reply, "refactored_code") {
            Some(code) => NormalizedResult::RefactoredCode(code),
            None => NormalizedResult::Empty,
        },
        Endpoint::Complete => match text_field(reply, "completed_code") {
            Some(code) => NormalizedResult::CompletedCode(code),
            None => NormalizedResult::Empty,
        },
        Endpoint::Summarize => match text_field(reply, "summary") {
            Some(summary) => NormalizedResult::Summary(summary),
            None => NormalizedResult::Empty,
        },
        Endpoint::DetectAndFix => normalize_detect_and_fix(reply),
        Endpoint::Suggest => normalize_suggestions(reply.get("suggestions")),
    }
}

/// A detected error wins over a fixed-code payload in the same reply;
/// the two are mutually exclusive in the service's design.
fn normalize_detect_and_fix(reply: &Value) -> NormalizedResult {
    if let Some(message) = text_field(reply, "error") {
        return NormalizedResult::DetectedError(message);
    }
    if let Some(code) = text_field(reply, "fixed_code") {
        let trimmed = code.trim();
        if !trimmed.is_empty() {
            return NormalizedResult::FixedCode(trimmed.to_string());
        }
    }
    NormalizedResult::Empty
}

fn normalize_suggestions(value: Option<&Value>) -> NormalizedResult {
    match value {
        // Absent or null suggestions are treated as an empty reply,
        // symmetric with the other endpoints.
        None | Some(Value::Null) => NormalizedResult::Empty,
        Some(Value::Array(items)) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => list.push(s.clone()),
                    other => {
                        return NormalizedResult::Unrecognized(format!(
                            "suggestions array holds a non-string value ({})",
                            kind_name(other)
                        ))
                    }
                }
            }
            NormalizedResult::Suggestions(SuggestionPayload::List(list))
        }
        Some(Value::String(s)) => NormalizedResult::Suggestions(SuggestionPayload::Single(s.clone())),
        Some(Value::Object(map)) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, value) in map {
                match value {
                    Value::String(s) => entries.push((key.clone(), s.clone())),
                    other => {
                        return NormalizedResult::Unrecognized(format!(
                            "suggestions entry \"{}\" holds a non-string value ({})",
                            key,
                            kind_name(other)
                        ))
                    }
                }
            }
            NormalizedResult::Suggestions(SuggestionPayload::Keyed(entries))
        }
        Some(other) => NormalizedResult::Unrecognized(format!(
            "suggestions is a {}, not an array, string, or object",
            kind_name(other)
        )),
    }
}

/// Non-empty string field lookup. Anything else — absent, null, empty,
/// or a non-string value — is treated as no payload.
fn text_field(reply: &Value, field: &str) -> Option<String> {
    match reply.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
