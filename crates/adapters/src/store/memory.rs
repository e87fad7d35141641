// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory request store.

use super::{RequestScopedStore, StoreError};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Request store held in process memory.
///
/// Create one per request; clones share the same buckets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything was ever stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    /// Remove and return the list under `key`, e.g. when the response is rendered.
    pub fn take(&self, key: &str) -> Vec<Value> {
        self.inner.lock().remove(key).unwrap_or_default()
    }
}

impl RequestScopedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self.inner.lock().get(key).cloned().unwrap_or_default())
    }

    fn put(&self, key: &str, items: Vec<Value>) -> Result<(), StoreError> {
        self.inner.lock().insert(key.to_string(), items);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
