// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog-backed localizer

use fln_core::{interpolate, Context, Localize};
use std::collections::HashMap;

/// Localizer backed by an in-memory `key -> template` catalog.
///
/// Loads the flat JSON shape used by per-locale translation files
/// (`{"notifications.saved": "Saved :name"}`).
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    entries: HashMap<String, String>,
}

impl CatalogLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn with_entry(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.entries.insert(key.into(), template.into());
        self
    }
}

impl Localize for CatalogLocalizer {
    fn localize(&self, key: &str, context: &Context) -> String {
        match self.entries.get(key) {
            Some(template) => interpolate(template, context),
            None => interpolate(key, context),
        }
    }
}

#[cfg(test)]
#[path = "localize_tests.rs"]
mod tests;
