// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Routes notifications to registered channels.

use crate::channels::{AlertChannel, Channel, ToastChannel};
use crate::store::RequestScopedStore;
use fln_core::{
    ChannelId, HandlerId, Notifiable, Notification, Notifier, NotifyError, SharedConfig,
    Translator,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Notifier that delivers to channels in the order a notification lists them.
///
/// Handler ids map to this crate's channels; passthrough names map to
/// whatever the host registered with [`ChannelNotifier::with_external`].
#[derive(Default)]
pub struct ChannelNotifier {
    channels: HashMap<ChannelId, Arc<dyn Channel>>,
}

impl ChannelNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier with the toast and alert channels writing to `store`.
    pub fn for_request(
        config: SharedConfig,
        translator: Translator,
        store: Arc<dyn RequestScopedStore>,
    ) -> Self {
        let toast = ToastChannel::new(config.clone(), translator.clone(), Arc::clone(&store));
        let alert = AlertChannel::new(config, translator, store);
        Self::new()
            .with_handler(HandlerId::Toast, Arc::new(toast))
            .with_handler(HandlerId::Alert, Arc::new(alert))
    }

    pub fn with_handler(mut self, id: HandlerId, channel: Arc<dyn Channel>) -> Self {
        self.channels.insert(ChannelId::Handler(id), channel);
        self
    }

    /// Register a host channel for a passthrough name such as `mail`.
    pub fn with_external(mut self, name: impl Into<String>, channel: Arc<dyn Channel>) -> Self {
        self.channels.insert(ChannelId::passthrough(name), channel);
        self
    }
}

impl Notifier for ChannelNotifier {
    fn dispatch(
        &self,
        target: &dyn Notifiable,
        notification: Box<dyn Notification>,
    ) -> Result<(), NotifyError> {
        for id in notification.via() {
            let channel = self
                .channels
                .get(&id)
                .ok_or_else(|| NotifyError::ChannelFailed {
                    channel: id.to_string(),
                    message: "no channel registered".to_string(),
                })?;
            channel.deliver(target, notification.as_ref())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
