// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording client push for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ClientPush;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// Recorded push
#[derive(Debug, Clone, PartialEq)]
pub struct PushCall {
    pub key: String,
    pub items: Vec<Value>,
}

/// Client push that records every flash
#[derive(Clone, Default)]
pub struct RecordingPush {
    inner: Arc<Mutex<Vec<PushCall>>>,
}

impl RecordingPush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded pushes
    pub fn calls(&self) -> Vec<PushCall> {
        self.inner.lock().clone()
    }

    /// Items from the most recent push under `key`
    pub fn latest(&self, key: &str) -> Option<Vec<Value>> {
        self.inner
            .lock()
            .iter()
            .rev()
            .find(|call| call.key == key)
            .map(|call| call.items.clone())
    }
}

impl ClientPush for RecordingPush {
    fn flash(&self, key: &str, items: &[Value]) {
        self.inner.lock().push(PushCall {
            key: key.to_string(),
            items: items.to_vec(),
        });
    }
}
