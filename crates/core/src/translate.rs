// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message localization

use crate::config::SharedConfig;
use crate::context::{display_value, Context};
use regex::{Captures, Regex};
use std::sync::{Arc, LazyLock};

/// Regex pattern for `:placeholder` references inside a template
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("constant regex pattern is valid")
});

/// Host translation lookup.
pub trait Localize: Send + Sync {
    /// Translate `key`, interpolating `context`. Returns the key itself
    /// (interpolated) when no translation exists.
    fn localize(&self, key: &str, context: &Context) -> String;
}

/// Localizer with no catalog: every key is its own translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLocalizer;

impl Localize for PassthroughLocalizer {
    fn localize(&self, key: &str, context: &Context) -> String {
        interpolate(key, context)
    }
}

/// Replace `:name`, `:Name` and `:NAME` placeholders with context values.
///
/// The casing of the placeholder selects the casing of the inserted value.
/// Placeholders without a matching context entry are left as-is.
pub fn interpolate(template: &str, context: &Context) -> String {
    if context.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            lookup(name, context).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn lookup(name: &str, context: &Context) -> Option<String> {
    if let Some(value) = context.get(name) {
        return Some(display_value(value));
    }
    let lower = name.to_lowercase();
    let value = display_value(context.get(&lower)?);
    if name.len() > 1 && name == name.to_uppercase() {
        Some(value.to_uppercase())
    } else if name.starts_with(|c: char| c.is_uppercase()) {
        Some(capitalize(&value))
    } else {
        Some(value)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolves display text according to the live translate flag.
#[derive(Clone)]
pub struct Translator {
    config: SharedConfig,
    localizer: Arc<dyn Localize>,
}

impl Translator {
    pub fn new(config: SharedConfig, localizer: Arc<dyn Localize>) -> Self {
        Self { config, localizer }
    }

    /// Translator backed by [`PassthroughLocalizer`].
    pub fn passthrough(config: SharedConfig) -> Self {
        Self::new(config, Arc::new(PassthroughLocalizer))
    }

    /// Localize `text` when translation is enabled, otherwise return it verbatim.
    pub fn resolve(&self, text: &str, context: &Context) -> String {
        if self.config.read(|c| c.translate) {
            self.localizer.localize(text, context)
        } else {
            text.to_string()
        }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
