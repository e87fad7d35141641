// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered interpolation context

use indexmap::IndexMap;
use serde_json::Value;

/// Context data attached to a notification, in insertion order.
pub type Context = IndexMap<String, Value>;

/// Build a [`Context`] from `key => value` pairs.
///
/// ```ignore
/// let ctx = context! { "code" => "ABC123", "id" => 1 };
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::Context::new();
        $(ctx.insert(::std::string::String::from($key), $crate::__serde_json::json!($value));)+
        ctx
    }};
}

/// Render a context value the way it appears inside interpolated text.
///
/// Strings are inserted without quotes; everything else uses its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
