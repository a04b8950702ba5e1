// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event record and the platform/metadata trees carried on it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Structured JSON-shaped value used for event payloads and metadata.
pub type Value = serde_json::Value;

/// A name/version pair describing one facet of the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub name: String,
    pub version: String,
}

impl PlatformInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Tagged union describing the runtime an event was issued from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Platform {
    Web {
        browser: PlatformInfo,
        device: PlatformInfo,
        os: PlatformInfo,
    },
    Native {
        device: PlatformInfo,
        os: PlatformInfo,
    },
    Server,
}

/// Error building an [`Event`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("event name must not be empty")]
    EmptyName,
}

/// A single piece of telemetry, immutable once constructed.
///
/// Events are handed to the dispatcher by value; nothing downstream of
/// `Dispatcher::enqueue` mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<HashMap<String, Value>>,
    pub issued_at: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub platform: Option<Platform>,
}

impl Event {
    /// Build an event, assigning `issued_at` from `now_ms`.
    ///
    /// `name` must be non-empty per the data model invariant; everything
    /// else is supplied by the facade (metadata merge, session, platform).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        payload: Option<Value>,
        metadata: Option<HashMap<String, Value>>,
        issued_at: i64,
        session_id: Option<String>,
        platform: Option<Platform>,
    ) -> Result<Self, EventError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EventError::EmptyName);
        }
        Ok(Self {
            name,
            payload,
            metadata,
            issued_at,
            session_id,
            platform,
        })
    }
}

/// Ergonomic, defaulted constructor for events built outside the facade
/// (e.g. tests assembling queue fixtures directly).
pub struct EventBuilder {
    name: String,
    payload: Option<Value>,
    metadata: Option<HashMap<String, Value>>,
    issued_at: i64,
    session_id: Option<String>,
    platform: Option<Platform>,
}

impl EventBuilder {
    pub fn new(name: impl Into<String>, issued_at: i64) -> Self {
        Self {
            name: name.into(),
            payload: None,
            metadata: None,
            issued_at,
            session_id: None,
            platform: None,
        }
    }

    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn build(self) -> Result<Event, EventError> {
        Event::new(
            self.name,
            self.payload,
            self.metadata,
            self.issued_at,
            self.session_id,
            self.platform,
        )
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
