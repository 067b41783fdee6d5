// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification contract for the ZAB Shift Scheduling System.
//!
//! The workflow engine produces [`Notification`] records as part of each
//! state transition (an outbox); it never talks to a mail system directly.
//! The server dispatches the records through a [`Notifier`] only after the
//! transition has been committed, so a delivery failure can never roll back
//! a successful swap.
//!
//! Delivery is fire-and-forget: implementations log failures and move on.
//! Recipients are addressed by [`EmployeeId`]; resolving an id to a mailbox
//! is the implementation's concern (the upstream identity provider owns
//! contact data).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use tracing::info;
use zab_shift_domain::EmployeeId;

/// A pending notification to a single employee.
///
/// Produced by the workflow engine, dispatched post-commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The employee to notify.
    pub recipient: EmployeeId,
    /// The notification subject line.
    pub subject: String,
    /// The notification body.
    pub body: String,
}

impl Notification {
    /// Creates a new `Notification`.
    ///
    /// # Arguments
    ///
    /// * `recipient` - The employee to notify
    /// * `subject` - The subject line
    /// * `body` - The body text
    #[must_use]
    pub const fn new(recipient: EmployeeId, subject: String, body: String) -> Self {
        Self {
            recipient,
            subject,
            body,
        }
    }
}

/// Delivers notifications to employees.
///
/// Implementations must be fire-and-forget: a failed delivery is logged,
/// never propagated to the caller.
pub trait Notifier: Send + Sync {
    /// Delivers a single notification.
    fn notify(&self, notification: &Notification);
}

/// A [`Notifier`] that emits notifications as structured log events.
///
/// This is the default wiring when no mail transport is configured; the
/// log stream doubles as a delivery audit trail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Creates a new `LogNotifier`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        info!(
            recipient = %notification.recipient,
            subject = %notification.subject,
            body = %notification.body,
            "Notification dispatched"
        );
    }
}

/// Dispatches every notification in an outbox slice.
///
/// Called by the server after a transition has been persisted.
pub fn dispatch_all(notifier: &dyn Notifier, notifications: &[Notification]) {
    for notification in notifications {
        notifier.notify(notification);
    }
}
