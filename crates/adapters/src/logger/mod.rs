// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger capability used by the dispatcher for all diagnostic output.

mod tracing_logger;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use tracing_logger::TracingLogger;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLogger, LoggedCall};

use serde_json::Value;

/// Severity of a log call. `None` is the sentinel level used by hosts that
/// want logging fully disabled without swapping the `Logger` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    None,
}

/// Structured logging sink. Filtering by level is the implementation's
/// concern; the dispatcher always calls the method matching the severity
/// described in the spec's error-handling design.
pub trait Logger: Send + Sync + 'static {
    fn debug(&self, message: &str, payload: Value);
    fn info(&self, message: &str, payload: Value);
    fn warn(&self, message: &str, payload: Value);
    fn error(&self, message: &str, payload: Value);
}

/// Logger sentinel that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneLogger;

impl Logger for NoneLogger {
    fn debug(&self, _message: &str, _payload: Value) {}
    fn info(&self, _message: &str, _payload: Value) {}
    fn warn(&self, _message: &str, _payload: Value) {}
    fn error(&self, _message: &str, _payload: Value) {}
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
