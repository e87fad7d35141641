// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced notifier wrapper for consistent observability

use fln_core::{Notifiable, Notification, Notifier, NotifyError};

/// Wrapper that adds tracing to any Notifier
#[derive(Clone, Debug)]
pub struct TracedNotifier<N> {
    inner: N,
}

impl<N> TracedNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }
}

impl<N: Notifier> Notifier for TracedNotifier<N> {
    fn dispatch(
        &self,
        target: &dyn Notifiable,
        notification: Box<dyn Notification>,
    ) -> Result<(), NotifyError> {
        let target_id = target.notifiable_id();
        let channels: Vec<String> = notification.via().iter().map(|c| c.to_string()).collect();
        let span = tracing::info_span!("notifier.dispatch", target_id = %target_id, ?channels);
        let _guard = span.enter();

        tracing::debug!(kind = ?notification.as_payload().map(|p| p.kind()), "dispatching");
        let start = std::time::Instant::now();
        let result = self.inner.dispatch(target, notification);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => tracing::debug!(elapsed_ms, "dispatched"),
            Err(e) => tracing::warn!(elapsed_ms, error = %e, "dispatch failed"),
        }
        result
    }
}
