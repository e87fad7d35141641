// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable notification payloads and their delivery representations

use crate::channel::{ChannelId, ChannelRegistry};
use crate::config::QueueConfig;
use crate::context::Context;
use crate::kind::NotificationType;
use crate::translate::Translator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Anything the notifier sink can route.
///
/// Host applications define their own notifications; channel handlers in
/// this crate family only act on [`NotificationPayload`]s and use
/// [`Notification::as_payload`] to tell them apart.
pub trait Notification: fmt::Debug + Send + Sync {
    /// Resolved delivery channels.
    fn via(&self) -> Vec<ChannelId>;

    /// Downcast to a payload built by this crate.
    fn as_payload(&self) -> Option<&NotificationPayload> {
        None
    }
}

/// Queue routing metadata for the host's dispatch subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuePlacement {
    pub connection: Option<String>,
    pub queue: Option<String>,
}

/// A finalized notification.
///
/// Built with the consuming `with_*` methods, then read-only. Display text
/// is resolved on demand and never cached, so it follows the live
/// translate flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPayload {
    kind: NotificationType,
    key: String,
    body: Option<String>,
    context: Context,
    channels: Vec<String>,
    queue: Option<QueuePlacement>,
}

impl NotificationPayload {
    pub fn new(kind: NotificationType, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            body: None,
            context: Context::new(),
            channels: vec!["toast".to_string()],
            queue: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn with_channels<S: Into<String>>(mut self, channels: impl IntoIterator<Item = S>) -> Self {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Attach queue placement when queueing is enabled; otherwise unchanged.
    pub fn with_queue(mut self, queue: &QueueConfig) -> Self {
        if queue.enabled {
            self.queue = Some(QueuePlacement {
                connection: queue.connection.clone(),
                queue: queue.queue.clone(),
            });
        }
        self
    }

    pub fn kind(&self) -> NotificationType {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Requested channel names, as given.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    pub fn queue(&self) -> Option<&QueuePlacement> {
        self.queue.as_ref()
    }

    pub fn resolve_channels(&self) -> Vec<ChannelId> {
        ChannelRegistry::resolve_all(&self.channels)
    }

    /// Display text for the key.
    pub fn resolve_message(&self, translator: &Translator) -> String {
        translator.resolve(&self.key, &self.context)
    }

    /// Display text for the body, if there is one.
    pub fn resolve_body(&self, translator: &Translator) -> Option<String> {
        self.body
            .as_deref()
            .map(|body| translator.resolve(body, &self.context))
    }

    /// Canonical shape consumed by every channel: `type`, `key`, `message`,
    /// then `body` (only when present) and `context`.
    pub fn to_renderable_map(&self, translator: &Translator) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".into(), Value::from(self.kind.as_str()));
        map.insert("key".into(), Value::from(self.key.as_str()));
        map.insert("message".into(), Value::from(self.resolve_message(translator)));
        if let Some(body) = self.resolve_body(translator) {
            map.insert("body".into(), Value::from(body));
        }
        let context = self
            .context
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Map<_, _>>();
        map.insert("context".into(), Value::Object(context));
        map
    }

    pub fn to_database(&self, translator: &Translator) -> Map<String, Value> {
        self.to_renderable_map(translator)
    }

    pub fn to_broadcast(&self, translator: &Translator) -> BroadcastMessage {
        BroadcastMessage {
            data: self.to_renderable_map(translator),
        }
    }

    pub fn to_mail(&self, translator: &Translator) -> MailMessage {
        let subject = self.resolve_message(translator);
        let line = self
            .resolve_body(translator)
            .unwrap_or_else(|| subject.clone());
        MailMessage {
            subject,
            lines: vec![line],
        }
    }
}

impl Notification for NotificationPayload {
    fn via(&self) -> Vec<ChannelId> {
        self.resolve_channels()
    }

    fn as_payload(&self) -> Option<&NotificationPayload> {
        Some(self)
    }
}

/// Mail representation: a subject and body lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub subject: String,
    pub lines: Vec<String>,
}

/// Broadcast representation wrapping the canonical map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub data: Map<String, Value>,
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
