// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op notifier.

use fln_core::{Notifiable, Notification, Notifier, NotifyError};

/// Notifier that silently discards all notifications.
///
/// Used when notifications are disabled or not yet configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifier;

impl NoOpNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for NoOpNotifier {
    fn dispatch(
        &self,
        _target: &dyn Notifiable,
        _notification: Box<dyn Notification>,
    ) -> Result<(), NotifyError> {
        Ok(())
    }
}
