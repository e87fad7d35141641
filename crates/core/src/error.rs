// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builder error taxonomy

use thiserror::Error;

/// Errors surfaced synchronously by the fluent builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A type selector named something outside the fixed set of types.
    #[error("Method {method} does not exist.")]
    UnknownBuilderMethod { method: String },
}
