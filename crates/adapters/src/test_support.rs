// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use fln_core::{Notifiable, Notification, Notifier, SharedConfig};

/// A notifiable target with a fixed id and a pluggable sink.
pub struct TestUser<N> {
    pub id: String,
    pub config: SharedConfig,
    pub notifier: N,
}

impl<N: Notifier> TestUser<N> {
    pub fn new(id: impl Into<String>, config: SharedConfig, notifier: N) -> Self {
        Self {
            id: id.into(),
            config,
            notifier,
        }
    }
}

impl<N: Notifier> Notifiable for TestUser<N> {
    fn notifiable_id(&self) -> String {
        self.id.clone()
    }

    fn notifier(&self) -> &dyn Notifier {
        &self.notifier
    }

    fn notification_config(&self) -> &SharedConfig {
        &self.config
    }
}

/// A notification defined outside this crate family, routed to `channels`.
#[derive(Debug, Clone)]
pub struct ForeignNotification {
    pub channels: Vec<String>,
}

impl ForeignNotification {
    pub fn new<S: Into<String>>(channels: impl IntoIterator<Item = S>) -> Self {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
        }
    }
}

impl Notification for ForeignNotification {
    fn via(&self) -> Vec<fln_core::ChannelId> {
        fln_core::ChannelRegistry::resolve_all(&self.channels)
    }
}
