// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default logger, backed by the `tracing` ecosystem.

use super::Logger;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, payload: Value) {
        tracing::debug!(%payload, "{message}");
    }

    fn info(&self, message: &str, payload: Value) {
        tracing::info!(%payload, "{message}");
    }

    fn warn(&self, message: &str, payload: Value) {
        tracing::warn!(%payload, "{message}");
    }

    fn error(&self, message: &str, payload: Value) {
        tracing::error!(%payload, "{message}");
    }
}
