// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert channel: persistent in-page banners.

use super::bucket::Bucket;
use super::Channel;
use crate::push::ClientPush;
use crate::store::RequestScopedStore;
use fln_core::{Notifiable, Notification, NotifyError, SessionKeys, SharedConfig, Translator};
use std::sync::Arc;

/// Appends payloads to the `session.alerts` bucket.
pub struct AlertChannel {
    bucket: Bucket,
}

impl AlertChannel {
    pub fn new(
        config: SharedConfig,
        translator: Translator,
        store: Arc<dyn RequestScopedStore>,
    ) -> Self {
        Self {
            bucket: Bucket::new(config, translator, store, alerts_key),
        }
    }

    /// Also push the whole bucket to the client after every append.
    pub fn with_push(mut self, push: Arc<dyn ClientPush>) -> Self {
        self.bucket.set_push(push);
        self
    }
}

impl Channel for AlertChannel {
    fn deliver(
        &self,
        target: &dyn Notifiable,
        notification: &dyn Notification,
    ) -> Result<(), NotifyError> {
        self.bucket.append(target, notification)
    }
}

fn alerts_key(keys: &SessionKeys) -> &str {
    &keys.alerts
}

#[cfg(test)]
#[path = "alert_tests.rs"]
mod tests;
