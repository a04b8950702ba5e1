// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scriptable fake transport for testing the retry state machine.

use super::{HeaderMap, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use telemetry_core::Event;

/// One pre-programmed outcome for the next `send` call.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Status(u16),
    NetworkError,
}

/// Recorded call to `send`.
#[derive(Debug, Clone)]
pub struct TransportCall {
    pub endpoint: String,
    pub events: Vec<Event>,
    pub headers: HeaderMap,
    pub api_key_header_name: String,
}

struct State {
    script: VecDeque<ScriptedResponse>,
    calls: Vec<TransportCall>,
}

/// Fake transport: returns scripted responses in order, falling back to a
/// `200` once the script is exhausted.
#[derive(Clone)]
pub struct FakeTransport {
    inner: std::sync::Arc<Mutex<State>>,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self {
            inner: std::sync::Arc::new(Mutex::new(State {
                script: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to be returned by the next `send` call.
    pub fn push_response(&self, response: ScriptedResponse) {
        self.inner.lock().script.push_back(response);
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(
        &self,
        endpoint: &str,
        events: &[Event],
        headers: &HeaderMap,
        api_key_header_name: &str,
    ) -> Result<TransportResponse, TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(TransportCall {
            endpoint: endpoint.to_string(),
            events: events.to_vec(),
            headers: headers.clone(),
            api_key_header_name: api_key_header_name.to_string(),
        });

        match inner.script.pop_front() {
            Some(ScriptedResponse::Status(status)) => Ok(TransportResponse::new(status)),
            Some(ScriptedResponse::NetworkError) => Err(TransportError::Network(
                "fake transport: simulated network error".into(),
            )),
            None => Ok(TransportResponse::new(200)),
        }
    }
}
