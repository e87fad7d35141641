// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifier sink contract

use crate::notifiable::Notifiable;
use crate::payload::Notification;
use thiserror::Error;

/// Errors from handing a notification to the sink
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
    #[error("channel {channel} failed: {message}")]
    ChannelFailed { channel: String, message: String },
    #[error("request store failed: {0}")]
    Store(String),
    #[error("notification consumer is closed")]
    Closed,
}

/// Framework-level dispatch: resolves channels and delivers.
///
/// Ownership of the notification moves into the sink; nothing on the
/// sending side can withdraw or alter it afterwards.
pub trait Notifier: Send + Sync {
    fn dispatch(
        &self,
        target: &dyn Notifiable,
        notification: Box<dyn Notification>,
    ) -> Result<(), NotifyError>;
}
