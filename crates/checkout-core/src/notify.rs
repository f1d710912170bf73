//! Notifications and State Observation
//!
//! The state machine reports outward through two explicit interfaces:
//! transient toasts (`Notifier`) and full state snapshots
//! (`CheckoutObserver`) for re-rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::CheckoutSnapshot;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A user-visible transient notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Sink for user-visible notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Receives a snapshot after every checkout state change
pub trait CheckoutObserver {
    fn on_change(&self, snapshot: &CheckoutSnapshot);
}

/// Observer that ignores changes
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl CheckoutObserver for NoopObserver {
    fn on_change(&self, _snapshot: &CheckoutSnapshot) {}
}
