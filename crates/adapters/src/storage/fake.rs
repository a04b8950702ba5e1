// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory fake storage for testing the dispatcher's persistence policy.

use super::{Storage, StorageError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use telemetry_core::Event;

/// Recorded call to the storage adapter.
#[derive(Debug, Clone)]
pub enum StorageCall {
    Save(Vec<Event>),
    Load,
    Clear,
}

struct State {
    persisted: Vec<Event>,
    calls: Vec<StorageCall>,
    save_errors: VecDeque<StorageError>,
}

/// Fake storage that actually persists (replace-all) so tests can assert
/// on the bounded snapshot the dispatcher writes.
#[derive(Clone)]
pub struct FakeStorage {
    inner: Arc<Mutex<State>>,
}

impl Default for FakeStorage {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(State {
                persisted: Vec::new(),
                calls: Vec::new(),
                save_errors: VecDeque::new(),
            })),
        }
    }
}

impl FakeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an error to be returned by the next `save` call.
    pub fn fail_next_save(&self, error: StorageError) {
        self.inner.lock().save_errors.push_back(error);
    }

    pub fn persisted(&self) -> Vec<Event> {
        self.inner.lock().persisted.clone()
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl Storage for FakeStorage {
    async fn save(&self, events: &[Event]) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        inner.calls.push(StorageCall::Save(events.to_vec()));
        if let Some(err) = inner.save_errors.pop_front() {
            return Err(err);
        }
        inner.persisted = events.to_vec();
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Event>, StorageError> {
        let mut inner = self.inner.lock();
        inner.calls.push(StorageCall::Load);
        Ok(inner.persisted.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        inner.calls.push(StorageCall::Clear);
        inner.persisted.clear();
        Ok(())
    }
}
