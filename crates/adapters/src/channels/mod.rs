// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery channels

mod alert;
mod bucket;
mod toast;

pub use alert::AlertChannel;
pub use toast::ToastChannel;

use fln_core::{Notifiable, Notification, NotifyError};

/// A delivery target for resolved notifications.
///
/// Implemented by this crate's toast and alert handlers and by hosts for
/// passthrough channels such as `mail` or `database`.
pub trait Channel: Send + Sync {
    fn deliver(
        &self,
        target: &dyn Notifiable,
        notification: &dyn Notification,
    ) -> Result<(), NotifyError>;
}
