// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Host-side collaborators: request stores, client push, channels and notifiers

pub mod channels;
pub mod localize;
pub mod notifier;
pub mod push;
pub mod store;

pub use channels::{AlertChannel, Channel, ToastChannel};
pub use localize::CatalogLocalizer;
pub use notifier::{ChannelNotifier, Envelope, ForwardingNotifier, NoOpNotifier, TracedNotifier};
pub use push::{ClientPush, NoOpPush};
pub use store::{MemoryStore, RequestScopedStore, StoreError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
#[cfg(any(test, feature = "test-support"))]
pub use notifier::{FakeNotifier, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use push::{PushCall, RecordingPush};
