// SPDX-License-Identifier: MIT
// End-to-end handler tests: selection validation, transport failure
// isolation, reply classification, and the confirmation gate, driven
// through a canned service client and a recording editor host.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use mori::host::EditorHost;
use mori::service::ServiceClient;
use mori::{run_command, Endpoint};

// ─── Test doubles ─────────────────────────────────────────────────────────────

/// Returns one canned reply (or failure) and counts outbound calls.
struct CannedClient {
    reply: Result<Value, String>,
    calls: AtomicUsize,
}

impl CannedClient {
    fn ok(reply: Value) -> Self {
        Self {
            reply: Ok(reply),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServiceClient for CannedClient {
    async fn request(&self, _endpoint: Endpoint, _code: &str) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

/// Records every effect the handler issues.
#[derive(Default)]
struct RecordingHost {
    selection: Option<String>,
    confirm_choice: Option<&'static str>,
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    replacements: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn with_selection(selection: &str) -> Self {
        Self {
            selection: Some(selection.to_string()),
            ..Self::default()
        }
    }

    fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    fn replacements(&self) -> Vec<String> {
        self.replacements.lock().unwrap().clone()
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl EditorHost for RecordingHost {
    fn active_selection(&self) -> Option<String> {
        self.selection.clone()
    }

    async fn replace_selection(&self, text: &str) -> Result<()> {
        self.replacements.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn show_info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, prompt: &str, _options: &[&str]) -> Option<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm_choice.map(String::from)
    }
}

// ─── Selection validation ─────────────────────────────────────────────────────

#[tokio::test]
async fn no_active_document_is_a_silent_no_op() {
    for endpoint in Endpoint::ALL {
        let client = CannedClient::ok(json!({}));
        let host = RecordingHost::default();

        run_command(endpoint, &client, &host).await.unwrap();

        assert_eq!(client.calls(), 0);
        assert!(host.infos().is_empty());
        assert!(host.errors().is_empty());
        assert!(host.replacements().is_empty());
    }
}

#[tokio::test]
async fn empty_selection_reports_one_error_and_makes_no_call() {
    for endpoint in Endpoint::ALL {
        let client = CannedClient::ok(json!({}));
        let host = RecordingHost::with_selection("");

        run_command(endpoint, &client, &host).await.unwrap();

        assert_eq!(client.calls(), 0);
        assert_eq!(host.errors(), vec![endpoint.select_prompt().to_string()]);
        assert!(host.infos().is_empty());
        assert!(host.replacements().is_empty());
    }
}

// ─── Transport failure ────────────────────────────────────────────────────────

#[tokio::test]
async fn transport_failure_yields_one_error_and_no_mutation() {
    for endpoint in Endpoint::ALL {
        let client = CannedClient::failing("connection refused");
        let host = RecordingHost::with_selection("let x = 1;");

        run_command(endpoint, &client, &host).await.unwrap();

        let errors = host.errors();
        assert_eq!(errors.len(), 1, "{endpoint}: {errors:?}");
        assert!(errors[0].starts_with(endpoint.failure_label()), "{}", errors[0]);
        assert!(errors[0].contains("connection refused"), "{}", errors[0]);
        assert!(host.replacements().is_empty());
        assert!(host.prompts().is_empty());
    }
}

// ─── Unconditional replacement ────────────────────────────────────────────────

#[tokio::test]
async fn refactor_replaces_selection_and_confirms() {
    let client = CannedClient::ok(json!({ "refactored_code": "fn neat() {}" }));
    let host = RecordingHost::with_selection("fn messy(){}");

    run_command(Endpoint::Refactor, &client, &host).await.unwrap();

    assert_eq!(host.replacements(), vec!["fn neat() {}".to_string()]);
    assert!(host.infos().contains(&"Code refactored successfully!".to_string()));
    assert!(host.errors().is_empty());
    assert!(host.prompts().is_empty(), "refactor must not ask for confirmation");
}

#[tokio::test]
async fn complete_replaces_selection_and_confirms() {
    let client = CannedClient::ok(json!({ "completed_code": "fn f() { 1 }" }));
    let host = RecordingHost::with_selection("fn f() {");

    run_command(Endpoint::Complete, &client, &host).await.unwrap();

    assert_eq!(host.replacements(), vec!["fn f() { 1 }".to_string()]);
    assert!(host.infos().contains(&"Code completed successfully!".to_string()));
    assert!(host.errors().is_empty());
}

// ─── Detect-and-fix ───────────────────────────────────────────────────────────

#[tokio::test]
async fn detected_error_wins_and_skips_the_confirmation_prompt() {
    let client = CannedClient::ok(json!({ "error": "X", "fixed_code": "Y" }));
    let host = RecordingHost::with_selection("bad code");

    run_command(Endpoint::DetectAndFix, &client, &host).await.unwrap();

    assert_eq!(host.errors(), vec!["Error Detected: X".to_string()]);
    assert!(host.prompts().is_empty(), "no confirmation prompt may appear");
    assert!(host.replacements().is_empty());
}

#[tokio::test]
async fn accepted_fix_is_trimmed_and_applied() {
    let client = CannedClient::ok(json!({ "fixed_code": "  fn fixed() {}\n" }));
    let mut host = RecordingHost::with_selection("fn broken() {}");
    host.confirm_choice = Some("Yes");

    run_command(Endpoint::DetectAndFix, &client, &host).await.unwrap();

    assert_eq!(host.prompts().len(), 1);
    assert_eq!(host.replacements(), vec!["fn fixed() {}".to_string()]);
    assert!(host.infos().contains(&"Code has been auto-fixed!".to_string()));
}

#[tokio::test]
async fn declined_fix_leaves_the_document_unchanged() {
    let client = CannedClient::ok(json!({ "fixed_code": "Y" }));
    let mut host = RecordingHost::with_selection("bad code");
    host.confirm_choice = Some("No");

    run_command(Endpoint::DetectAndFix, &client, &host).await.unwrap();

    assert!(host.replacements().is_empty());
    assert!(host.infos().contains(&"No changes made.".to_string()));
    assert!(host.errors().is_empty());
}

#[tokio::test]
async fn dismissed_confirmation_counts_as_declined() {
    let client = CannedClient::ok(json!({ "fixed_code": "Y" }));
    let host = RecordingHost::with_selection("bad code"); // confirm_choice: None

    run_command(Endpoint::DetectAndFix, &client, &host).await.unwrap();

    assert!(host.replacements().is_empty());
    assert!(host.infos().contains(&"No changes made.".to_string()));
}

#[tokio::test]
async fn empty_detect_and_fix_reply_means_no_errors_found() {
    let client = CannedClient::ok(json!({}));
    let host = RecordingHost::with_selection("fine code");

    run_command(Endpoint::DetectAndFix, &client, &host).await.unwrap();

    assert!(host.errors().is_empty());
    assert!(host.infos().contains(&"No errors found.".to_string()));
    assert!(host.replacements().is_empty());
}

// ─── Empty replies ────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_reply_maps_to_endpoint_specific_error() {
    let cases = [
        (Endpoint::Refactor, "No refactored code returned."),
        (Endpoint::Summarize, "No summary returned."),
        (Endpoint::Complete, "No completed code returned."),
        (Endpoint::Suggest, "No suggestions returned."),
    ];
    for (endpoint, expected) in cases {
        let client = CannedClient::ok(json!({}));
        let host = RecordingHost::with_selection("code");

        run_command(endpoint, &client, &host).await.unwrap();

        assert_eq!(host.errors(), vec![expected.to_string()], "{endpoint}");
        assert!(host.replacements().is_empty());
    }
}

// ─── Summaries and suggestions ────────────────────────────────────────────────

#[tokio::test]
async fn summary_is_shown_with_its_label() {
    let client = CannedClient::ok(json!({ "summary": "adds two numbers" }));
    let host = RecordingHost::with_selection("fn add(a: u8, b: u8) -> u8 { a + b }");

    run_command(Endpoint::Summarize, &client, &host).await.unwrap();

    assert!(host.infos().contains(&"Summary: adds two numbers".to_string()));
    assert!(host.errors().is_empty());
    assert!(host.replacements().is_empty());
}

#[tokio::test]
async fn suggestion_list_is_grouped_with_item_and_piece_labels() {
    let client = CannedClient::ok(json!({ "suggestions": ["a", "b"] }));
    let host = RecordingHost::with_selection("code");

    run_command(Endpoint::Suggest, &client, &host).await.unwrap();

    let infos = host.infos();
    let payload = infos.last().unwrap();
    assert!(payload.contains("**Suggestion 1.1:**\na"), "{payload}");
    assert!(payload.contains("**Suggestion 2.1:**\nb"), "{payload}");
    assert!(host.errors().is_empty());
}

#[tokio::test]
async fn single_suggestion_arrives_as_one_notice_per_piece() {
    // 2500 characters → three pieces → three prefixed notices.
    let long = "x".repeat(2500);
    let client = CannedClient::ok(json!({ "suggestions": long }));
    let host = RecordingHost::with_selection("code");

    run_command(Endpoint::Suggest, &client, &host).await.unwrap();

    let infos = host.infos();
    // First info is the in-flight progress notice.
    let notices: Vec<_> = infos[1..].to_vec();
    assert_eq!(notices.len(), 3);
    for notice in &notices {
        assert!(notice.starts_with("**Refactoring Suggestion:**\n"), "{notice}");
    }
}

#[tokio::test]
async fn keyed_suggestions_render_headings_in_order() {
    let reply: Value =
        serde_json::from_str(r#"{"suggestions": {"naming": "use snake_case", "length": "split it"}}"#)
            .unwrap();
    let client = CannedClient::ok(reply);
    let host = RecordingHost::with_selection("code");

    run_command(Endpoint::Suggest, &client, &host).await.unwrap();

    let infos = host.infos();
    let payload = infos.last().unwrap();
    assert!(payload.starts_with("**Refactoring Suggestions (Object):**"), "{payload}");
    let naming = payload.find("**naming:**").unwrap();
    let length = payload.find("**length:**").unwrap();
    assert!(naming < length, "keys must render in encounter order");
}

#[tokio::test]
async fn empty_suggestion_list_is_reported_not_dropped() {
    let client = CannedClient::ok(json!({ "suggestions": [] }));
    let host = RecordingHost::with_selection("code");

    run_command(Endpoint::Suggest, &client, &host).await.unwrap();

    assert_eq!(host.errors(), vec!["No suggestions returned.".to_string()]);
}

#[tokio::test]
async fn unrecognized_suggestion_shape_names_what_was_found() {
    let client = CannedClient::ok(json!({ "suggestions": true }));
    let host = RecordingHost::with_selection("code");

    run_command(Endpoint::Suggest, &client, &host).await.unwrap();

    let errors = host.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Unexpected response format:"), "{}", errors[0]);
    assert!(errors[0].contains("boolean"), "{}", errors[0]);
    assert!(host.replacements().is_empty());
}
