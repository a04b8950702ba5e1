// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport capability: delivers a batch of events to the collector.
//!
//! No real HTTP/fetch/Beacon implementation lives here — those are host
//! collaborators per the spec's Non-goals. This module only defines the
//! contract and, behind `test-support`, a scriptable fake.

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, ScriptedResponse, TransportCall};

use async_trait::async_trait;
use std::collections::BTreeMap;
use telemetry_core::Event;
use thiserror::Error;

/// Outgoing header set for one send, always containing the credential
/// header and `Content-Type`. A `BTreeMap` keeps header order stable for
/// tests and logging without pulling in a dedicated header-map crate.
pub type HeaderMap = BTreeMap<String, String>;

/// Response from the collector; the dispatcher reads only `status`.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub data: Option<serde_json::Value>,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status, data: None }
    }
}

/// Error raised by a transport implementation; always classified as a
/// network failure by the dispatcher's retry state machine.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
}

/// Delivers one batch of events to the collector endpoint.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(
        &self,
        endpoint: &str,
        events: &[Event],
        headers: &HeaderMap,
        api_key_header_name: &str,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
