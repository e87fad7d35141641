// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent notification builder
//!
//! A builder produces at most one payload. It is sent either by an explicit
//! [`FluentNotification::send`] or, as a safety net, when it goes out of
//! scope unsent. Only the explicit path reports errors.

use crate::context::Context;
use crate::error::BuilderError;
use crate::kind::NotificationType;
use crate::notifiable::Notifiable;
use crate::notifier::NotifyError;
use crate::payload::NotificationPayload;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Accumulates type, channels and context for one notification.
///
/// ```ignore
/// user.notify("orders.shipped")
///     .success()
///     .via(["toast", "mail"])
///     .context(context! { "id" => 42 })
///     .send()?;
/// ```
pub struct FluentNotification<'a> {
    target: &'a dyn Notifiable,
    key: String,
    body: Option<String>,
    context: Context,
    kind: NotificationType,
    channels: Vec<String>,
    sent: bool,
}

impl<'a> FluentNotification<'a> {
    /// Defaults are captured from configuration now, not at send time.
    pub fn new(target: &'a dyn Notifiable, key: impl Into<String>) -> Self {
        let (kind, channels) = target
            .notification_config()
            .read(|c| (c.default_type, c.default_channels.clone()));
        Self {
            target,
            key: key.into(),
            body: None,
            context: Context::new(),
            kind,
            channels,
            sent: false,
        }
    }

    pub fn kind(&mut self, kind: NotificationType) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Select a type by name. Unknown names fail and leave the builder untouched.
    pub fn select(&mut self, name: &str) -> Result<&mut Self, BuilderError> {
        let kind = name.parse()?;
        Ok(self.kind(kind))
    }

    pub fn success(&mut self) -> &mut Self {
        self.kind(NotificationType::Success)
    }

    pub fn error(&mut self) -> &mut Self {
        self.kind(NotificationType::Error)
    }

    pub fn warning(&mut self) -> &mut Self {
        self.kind(NotificationType::Warning)
    }

    pub fn info(&mut self) -> &mut Self {
        self.kind(NotificationType::Info)
    }

    /// Replace the channel list.
    pub fn via<S: Into<String>>(&mut self, channels: impl IntoIterator<Item = S>) -> &mut Self {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the context map.
    pub fn context(&mut self, context: Context) -> &mut Self {
        self.context = context;
        self
    }

    /// Secondary text shown under the key.
    pub fn message(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// Build the payload this builder would send right now.
    pub fn payload(&self) -> NotificationPayload {
        let queue = self.target.notification_config().read(|c| c.queue.clone());
        let payload = NotificationPayload::new(self.kind, self.key.clone())
            .with_context(self.context.clone())
            .with_channels(self.channels.clone())
            .with_queue(&queue);
        match &self.body {
            Some(body) => payload.with_body(body.clone()),
            None => payload,
        }
    }

    /// Send the notification. A second call is a no-op.
    pub fn send(&mut self) -> Result<(), NotifyError> {
        if self.sent {
            return Ok(());
        }
        self.sent = true;
        let payload = self.payload();
        self.target
            .notifier()
            .dispatch(self.target, Box::new(payload))
    }
}

impl Drop for FluentNotification<'_> {
    fn drop(&mut self) {
        // A second panic during unwinding would abort the process.
        if self.sent || std::thread::panicking() {
            return;
        }
        // Failures here have nowhere to go: drop them, panics included.
        let _ = catch_unwind(AssertUnwindSafe(|| self.send()));
    }
}

impl std::fmt::Debug for FluentNotification<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluentNotification")
            .field("target", &self.target.notifiable_id())
            .field("key", &self.key)
            .field("body", &self.body)
            .field("context", &self.context)
            .field("kind", &self.kind)
            .field("channels", &self.channels)
            .field("sent", &self.sent)
            .finish()
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
