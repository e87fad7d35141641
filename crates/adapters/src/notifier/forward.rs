// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hands notifications to an async consumer.

use fln_core::{Notifiable, Notification, Notifier, NotifyError};
use tokio::sync::mpsc;

/// A notification addressed to a target, in flight to the consumer.
#[derive(Debug)]
pub struct Envelope {
    pub target: String,
    pub notification: Box<dyn Notification>,
}

/// Notifier for hosts that deliver (or queue) on an async task.
///
/// Sending never blocks; once handed off the notification belongs to the
/// consumer.
#[derive(Clone, Debug)]
pub struct ForwardingNotifier {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl ForwardingNotifier {
    pub fn new(tx: mpsc::UnboundedSender<Envelope>) -> Self {
        Self { tx }
    }

    /// Create a notifier together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Notifier for ForwardingNotifier {
    fn dispatch(
        &self,
        target: &dyn Notifiable,
        notification: Box<dyn Notification>,
    ) -> Result<(), NotifyError> {
        let envelope = Envelope {
            target: target.notifiable_id(),
            notification,
        };
        self.tx.send(envelope).map_err(|_| NotifyError::Closed)
    }
}

#[cfg(test)]
#[path = "forward_tests.rs"]
mod tests;
