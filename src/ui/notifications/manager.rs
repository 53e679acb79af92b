// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Notifier` holds the visible notifications in insertion order and
//! removes them when their timer runs out or when they are dismissed.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::NotificationConfig;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Check auto-dismiss timers against the given instant.
    Tick(Instant),
}

/// Toast notification service.
///
/// One instance is owned by the page composition root and passed to the
/// components that report to the user.
#[derive(Debug, Default)]
pub struct Notifier {
    /// Currently visible notifications (oldest first).
    visible: Vec<Notification>,
    durations: NotificationConfig,
}

impl Notifier {
    /// Creates a new empty notifier using the built-in default durations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier whose per-severity defaults come from configuration.
    #[must_use]
    pub fn with_durations(durations: NotificationConfig) -> Self {
        Self {
            visible: Vec::new(),
            durations,
        }
    }

    /// Shows a notification.
    ///
    /// `duration` of `None` uses the severity default; `Some(Duration::ZERO)`
    /// shows a persistent notification that only an explicit dismissal removes.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> NotificationId {
        let duration = duration.unwrap_or_else(|| self.durations.duration_for(severity));
        let notification = Notification::new(severity, message, duration, Instant::now());
        match severity {
            Severity::Warning => tracing::warn!(text = notification.message(), "notification shown"),
            Severity::Error => tracing::error!(text = notification.message(), "notification shown"),
            Severity::Success | Severity::Info => {
                tracing::debug!(text = notification.message(), "notification shown");
            }
        }
        let id = notification.id();
        self.visible.push(notification);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Success, None)
    }

    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Info, None)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Warning, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Error, None)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Dismissing
    /// an already-removed notification is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            return true;
        }
        false
    }

    /// Removes every notification whose timer has expired at `now`.
    ///
    /// Returns the IDs that were removed.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in &expired {
            self.dismiss(*id);
        }
        expired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns the currently visible notifications in stacking order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Earliest instant at which a visible notification expires.
    ///
    /// Adapters use this to schedule the next tick instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.visible
            .iter()
            .filter(|n| !n.is_persistent())
            .map(|n| n.shown_at() + n.duration())
            .min()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}
