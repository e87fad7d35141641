// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request-scoped storage adapters

mod memory;

pub use memory::MemoryStore;

use serde_json::Value;
use thiserror::Error;

/// Errors from request-scoped storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Ephemeral ordered storage bound to one request/response cycle.
///
/// Hosts scope instances to the request or session so concurrent requests
/// never share a bucket.
pub trait RequestScopedStore: Send + Sync {
    /// List stored under `key`; empty when absent.
    fn get(&self, key: &str) -> Result<Vec<Value>, StoreError>;

    /// Replace the list stored under `key`.
    fn put(&self, key: &str, items: Vec<Value>) -> Result<(), StoreError>;
}
