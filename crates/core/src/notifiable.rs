// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifiable capability for target entities

use crate::builder::FluentNotification;
use crate::config::SharedConfig;
use crate::context::Context;
use crate::notifier::{Notifier, NotifyError};
use crate::payload::Notification;

/// An entity that can receive notifications.
///
/// Implementors provide identity, the sink, and the configuration handle;
/// the entry points are provided methods.
pub trait Notifiable {
    /// Stable identifier of this target (e.g. a user's primary key).
    fn notifiable_id(&self) -> String;

    /// The sink notifications for this target are handed to.
    fn notifier(&self) -> &dyn Notifier;

    /// Live configuration the builder captures its defaults from.
    fn notification_config(&self) -> &SharedConfig;

    /// Start a fluent notification for `key`.
    ///
    /// The returned builder sends when `send()` is called or, failing
    /// that, when it is dropped.
    fn notify(&self, key: impl Into<String>) -> FluentNotification<'_>
    where
        Self: Sized,
    {
        FluentNotification::new(self, key)
    }

    /// Start a fluent notification for `key` with interpolation context.
    fn notify_with_context(&self, key: impl Into<String>, context: Context) -> FluentNotification<'_>
    where
        Self: Sized,
    {
        let mut builder = FluentNotification::new(self, key);
        builder.context(context);
        builder
    }

    /// Hand a fully-formed notification straight to the sink.
    fn notify_now(&self, notification: Box<dyn Notification>) -> Result<(), NotifyError>
    where
        Self: Sized,
    {
        self.notifier().dispatch(self, notification)
    }
}
