// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only request buckets shared by the toast and alert channels.

use crate::push::ClientPush;
use crate::store::RequestScopedStore;
use fln_core::{Notifiable, Notification, NotifyError, SessionKeys, SharedConfig, Translator};
use std::sync::Arc;

pub(super) struct Bucket {
    config: SharedConfig,
    translator: Translator,
    store: Arc<dyn RequestScopedStore>,
    push: Option<Arc<dyn ClientPush>>,
    key_of: fn(&SessionKeys) -> &str,
}

impl Bucket {
    pub(super) fn new(
        config: SharedConfig,
        translator: Translator,
        store: Arc<dyn RequestScopedStore>,
        key_of: fn(&SessionKeys) -> &str,
    ) -> Self {
        Self {
            config,
            translator,
            store,
            push: None,
            key_of,
        }
    }

    pub(super) fn set_push(&mut self, push: Arc<dyn ClientPush>) {
        self.push = Some(push);
    }

    /// Append the rendered payload to the configured bucket.
    ///
    /// Notifications not built by this crate are ignored.
    pub(super) fn append(
        &self,
        target: &dyn Notifiable,
        notification: &dyn Notification,
    ) -> Result<(), NotifyError> {
        let Some(payload) = notification.as_payload() else {
            tracing::trace!(?notification, "ignoring foreign notification");
            return Ok(());
        };

        let key = self.config.read(|c| (self.key_of)(&c.session).to_string());
        let mut items = self
            .store
            .get(&key)
            .map_err(|e| NotifyError::Store(e.to_string()))?;
        items.push(payload.to_renderable_map(&self.translator).into());

        self.store
            .put(&key, items.clone())
            .map_err(|e| NotifyError::Store(e.to_string()))?;
        if let Some(push) = &self.push {
            push.flash(&key, &items);
        }

        tracing::debug!(
            target_id = %target.notifiable_id(),
            bucket = %key,
            len = items.len(),
            "appended notification"
        );
        Ok(())
    }
}
