// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client push adapters for server-driven hydration

mod noop;

pub use noop::NoOpPush;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{PushCall, RecordingPush};

use serde_json::Value;

/// Pushes a full bucket to the client-bound page payload.
pub trait ClientPush: Send + Sync {
    /// Replace the client-side list under `key` with `items`.
    fn flash(&self, key: &str, items: &[Value]);
}
