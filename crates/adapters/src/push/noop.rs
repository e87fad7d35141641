// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op client push.

use super::ClientPush;
use serde_json::Value;

/// Client push for hosts without client-side hydration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPush;

impl ClientPush for NoOpPush {
    fn flash(&self, _key: &str, _items: &[Value]) {}
}
