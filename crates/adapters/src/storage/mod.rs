// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage capability: a best-effort durable mirror of the in-memory queue.
//!
//! File/localStorage/sessionStorage/IndexedDB/cookie-backed implementations
//! are host collaborators per the spec's Non-goals; this module defines the
//! contract plus the trivial `NoopStorage` the spec names explicitly and,
//! behind `test-support`, a call-recording fake.

mod noop;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use noop::NoopStorage;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStorage, StorageCall};

use async_trait::async_trait;
use telemetry_core::Event;
use thiserror::Error;

/// Error from a storage operation. The dispatcher never rethrows these to
/// its own callers — it logs and carries on with in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: kept {saved}, dropped {dropped}")]
    QuotaExceeded { saved: usize, dropped: usize },
    #[error("storage error: {0}")]
    Other(String),
}

/// Persists the dispatcher's queue tail under this instance's storage
/// identity. `save` has replace-all semantics: it is not an append.
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    async fn save(&self, events: &[Event]) -> Result<(), StorageError>;

    /// Last persisted batch in order, or empty if none / expired.
    async fn load(&self) -> Result<Vec<Event>, StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
