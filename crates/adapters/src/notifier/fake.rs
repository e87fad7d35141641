// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notifier for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use fln_core::{Notifiable, Notification, NotificationPayload, Notifier, NotifyError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded dispatch
#[derive(Debug, Clone)]
pub struct NotifyCall {
    pub target: String,
    /// Set when the notification was a payload built by the fluent builder.
    pub payload: Option<NotificationPayload>,
    /// Debug rendering of the notification, for foreign types.
    pub debug: String,
}

struct FakeNotifyState {
    calls: Vec<NotifyCall>,
    fail_with: Option<String>,
}

/// Fake notifier for testing
#[derive(Clone)]
pub struct FakeNotifier {
    inner: Arc<Mutex<FakeNotifyState>>,
}

impl Default for FakeNotifier {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeNotifyState {
                calls: Vec::new(),
                fail_with: None,
            })),
        }
    }
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent dispatch fail with `message` (still recorded).
    pub fn fail_with(&self, message: impl Into<String>) {
        self.inner.lock().fail_with = Some(message.into());
    }

    /// Get all recorded dispatches
    pub fn calls(&self) -> Vec<NotifyCall> {
        self.inner.lock().calls.clone()
    }

    /// Payloads dispatched to `target`, in order
    pub fn payloads_for(&self, target: &str) -> Vec<NotificationPayload> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|call| call.target == target)
            .filter_map(|call| call.payload.clone())
            .collect()
    }
}

impl Notifier for FakeNotifier {
    fn dispatch(
        &self,
        target: &dyn Notifiable,
        notification: Box<dyn Notification>,
    ) -> Result<(), NotifyError> {
        let mut state = self.inner.lock();
        state.calls.push(NotifyCall {
            target: target.notifiable_id(),
            payload: notification.as_payload().cloned(),
            debug: format!("{notification:?}"),
        });
        match &state.fail_with {
            Some(message) => Err(NotifyError::SendFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
