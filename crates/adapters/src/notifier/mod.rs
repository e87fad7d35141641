// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifier sinks

mod forward;
mod noop;
mod route;
mod traced;

pub use forward::{Envelope, ForwardingNotifier};
pub use noop::NoOpNotifier;
pub use route::ChannelNotifier;
pub use traced::TracedNotifier;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifier, NotifyCall};
