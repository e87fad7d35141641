// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fln-core: fluent notification builder, payloads and channel resolution

pub mod builder;
pub mod channel;
pub mod config;
pub mod context;
pub mod error;
pub mod kind;
pub mod notifiable;
pub mod notifier;
pub mod payload;
pub mod translate;

pub use builder::FluentNotification;
pub use channel::{ChannelId, ChannelRegistry, HandlerId};
pub use config::{ConfigError, FluentConfig, QueueConfig, SessionKeys, SharedConfig};
pub use context::Context;
pub use error::BuilderError;
pub use kind::NotificationType;
pub use notifiable::Notifiable;
pub use notifier::{Notifier, NotifyError};
pub use payload::{
    BroadcastMessage, MailMessage, Notification, NotificationPayload, QueuePlacement,
};
pub use translate::{interpolate, Localize, PassthroughLocalizer, Translator};

#[doc(hidden)]
pub use serde_json as __serde_json;
