// SPDX-License-Identifier: MIT
//! Mori editor assist — command core.
//!
//! Sends the user's selected text to a local code-intelligence service
//! and turns the reply into a single editor action: replace the
//! selection, show one or more notices, or show an error.
//!
//! | Module      | Responsibility                                       |
//! |-------------|------------------------------------------------------|
//! | `endpoint`  | The five remote capabilities and their fixed wording |
//! | `chunk`     | Bounded-length text splitting for notice display     |
//! | `normalize` | Untyped reply → one closed `NormalizedResult`        |
//! | `dispatch`  | `NormalizedResult` → editor `Action` + execution     |
//! | `command`   | Per-invocation orchestration (selection → effect)    |
//! | `service`   | HTTP client for the remote service                   |
//! | `host`      | Editor abstraction (selection, edits, notices)       |
//! | `config`    | Layered CLI/env > TOML > default configuration       |
//!
//! The core never lets an error escape a command invocation: every
//! failure is converted into exactly one user-visible notice at the
//! point of detection.

pub mod chunk;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod host;
pub mod normalize;
pub mod service;

pub use command::run_command;
pub use endpoint::Endpoint;
