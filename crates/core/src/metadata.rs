// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide metadata merged into every outgoing event.

use crate::event::Value;
use std::collections::HashMap;

/// Typed key/value store; per-call metadata overlays this on merge.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    entries: HashMap<String, Value>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Shallow copy; mutating the returned map never affects the store.
    pub fn get_all(&self) -> HashMap<String, Value> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Merge the store with `extra`, `extra` winning on key collision.
    /// Returns `None` only when both the store and `extra` are empty.
    pub fn merge(&self, extra: Option<HashMap<String, Value>>) -> Option<HashMap<String, Value>> {
        let extra_is_empty = extra.as_ref().map(HashMap::is_empty).unwrap_or(true);
        if self.entries.is_empty() && extra_is_empty {
            return None;
        }
        let mut merged = self.entries.clone();
        if let Some(extra) = extra {
            merged.extend(extra);
        }
        Some(merged)
    }
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
