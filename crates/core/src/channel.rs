// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel names and handler resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handlers implemented by this crate family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerId {
    Toast,
    Alert,
}

impl HandlerId {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerId::Toast => "toast",
            HandlerId::Alert => "alert",
        }
    }
}

/// Where a requested channel name resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelId {
    /// One of this system's own handlers.
    Handler(HandlerId),
    /// A name the registry does not know, handed to the host unchanged
    /// (`mail`, `database`, `broadcast`, ...).
    Passthrough(String),
}

impl ChannelId {
    pub fn passthrough(name: impl Into<String>) -> Self {
        ChannelId::Passthrough(name.into())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelId::Handler(id) => write!(f, "{}", id.as_str()),
            ChannelId::Passthrough(name) => f.write_str(name),
        }
    }
}

/// Static mapping from short channel names to handlers.
pub struct ChannelRegistry;

impl ChannelRegistry {
    const MAP: [(&'static str, HandlerId); 2] =
        [("toast", HandlerId::Toast), ("alert", HandlerId::Alert)];

    /// Resolve one channel name; unknown names pass through.
    pub fn resolve(name: &str) -> ChannelId {
        Self::MAP
            .iter()
            .find(|(short, _)| *short == name)
            .map(|(_, id)| ChannelId::Handler(*id))
            .unwrap_or_else(|| ChannelId::passthrough(name))
    }

    /// Resolve a list of names, preserving order and duplicates.
    pub fn resolve_all<S: AsRef<str>>(names: &[S]) -> Vec<ChannelId> {
        names.iter().map(|n| Self::resolve(n.as_ref())).collect()
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
