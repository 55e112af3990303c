// SPDX-License-Identifier: MIT
//! Command orchestration — the one handler shape shared by all five
//! capabilities.
//!
//! Per invocation: read selection → validate → request → normalize →
//! dispatch → execute. Every failure along the way is converted into
//! exactly one error notice at the point of detection; the handler
//! never terminates silently except when no document is active.
//!
//! Invocations are independent tasks with no shared state beyond the
//! document itself. Two may be in flight at once and their edits apply
//! in reply-arrival order — last applied wins on overlapping ranges.

use anyhow::Result;
use tracing::{debug, warn};

use crate::dispatch::{dispatch, execute};
use crate::endpoint::Endpoint;
use crate::host::EditorHost;
use crate::normalize::normalize;
use crate::service::ServiceClient;

/// Run one command invocation end to end.
///
/// The returned `Result` covers host-side effect failures only;
/// validation, transport, and normalization problems are reported to
/// the user through the host and do not propagate.
pub async fn run_command(
    endpoint: Endpoint,
    client: &dyn ServiceClient,
    host: &dyn EditorHost,
) -> Result<()> {
    let Some(selection) = host.active_selection() else {
        debug!(endpoint = %endpoint, "no active document, ignoring command");
        return Ok(());
    };

    if selection.is_empty() {
        host.show_error(endpoint.select_prompt());
        return Ok(());
    }

    host.show_info(endpoint.progress_notice());

    let reply = match client.request(endpoint, &selection).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(endpoint = %endpoint, err = %e, "service request failed");
            host.show_error(&format!("{}: {:#}", endpoint.failure_label(), e));
            return Ok(());
        }
    };

    let result = normalize(endpoint, &reply);
    debug!(endpoint = %endpoint, result = result.kind(), "reply normalized");

    execute(dispatch(endpoint, result), host).await
}
