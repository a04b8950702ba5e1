// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Call-recording fake logger for asserting on dispatcher log output.

use super::Logger;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCall {
    pub level: &'static str,
    pub message: String,
    pub payload: Value,
}

#[derive(Clone, Default)]
pub struct FakeLogger {
    calls: Arc<Mutex<Vec<LoggedCall>>>,
}

impl FakeLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<LoggedCall> {
        self.calls.lock().clone()
    }

    pub fn calls_at_level(&self, level: &str) -> Vec<LoggedCall> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.level == level)
            .cloned()
            .collect()
    }
}

impl Logger for FakeLogger {
    fn debug(&self, message: &str, payload: Value) {
        self.calls.lock().push(LoggedCall {
            level: "debug",
            message: message.to_string(),
            payload,
        });
    }

    fn info(&self, message: &str, payload: Value) {
        self.calls.lock().push(LoggedCall {
            level: "info",
            message: message.to_string(),
            payload,
        });
    }

    fn warn(&self, message: &str, payload: Value) {
        self.calls.lock().push(LoggedCall {
            level: "warn",
            message: message.to_string(),
            payload,
        });
    }

    fn error(&self, message: &str, payload: Value) {
        self.calls.lock().push(LoggedCall {
            level: "error",
            message: message.to_string(),
            payload,
        });
    }
}
