// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification severity types

use crate::error::BuilderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a notification.
///
/// The set is closed: a name outside it is a programming error and is
/// rejected with [`BuilderError::UnknownBuilderMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationType {
    pub const ALL: [NotificationType; 4] = [
        NotificationType::Success,
        NotificationType::Error,
        NotificationType::Warning,
        NotificationType::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Success => "success",
            NotificationType::Error => "error",
            NotificationType::Warning => "warning",
            NotificationType::Info => "info",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BuilderError::UnknownBuilderMethod {
                method: s.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
