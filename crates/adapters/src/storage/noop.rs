// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op storage: in-memory state is the only state. Used by hosts that
//! accept losing the unsent tail on process restart.

use super::{Storage, StorageError};
use async_trait::async_trait;
use telemetry_core::Event;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

#[async_trait]
impl Storage for NoopStorage {
    async fn save(&self, _events: &[Event]) -> Result<(), StorageError> {
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Event>, StorageError> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
