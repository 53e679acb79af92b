// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::config::{DEFAULT_ERROR_MS, DEFAULT_INFO_MS, DEFAULT_SUCCESS_MS, DEFAULT_WARNING_MS};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines default display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (5s).
    Success,
    /// Informational message (5s).
    #[default]
    Info,
    /// Non-blocking problem, e.g. an empty search (6s).
    Warning,
    /// Failure requiring attention (7s).
    Error,
}

impl Severity {
    /// Returns the auto-dismiss duration used when the caller gives none.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        let ms = match self {
            Severity::Success => DEFAULT_SUCCESS_MS,
            Severity::Info => DEFAULT_INFO_MS,
            Severity::Warning => DEFAULT_WARNING_MS,
            Severity::Error => DEFAULT_ERROR_MS,
        };
        Duration::from_millis(ms)
    }

    /// Glyph rendered next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}",
            Severity::Info => "\u{2139}",
            Severity::Warning => "\u{26A0}",
            Severity::Error => "\u{2715}",
        }
    }

    /// Style class name for renderers.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A notification displayed to the user.
///
/// A zero duration makes the notification persistent until dismissed.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    /// Creates a notification shown at `shown_at` for `duration`.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
        shown_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            shown_at,
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this notification stays until explicitly dismissed.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns whether the auto-dismiss timer has run out at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.is_persistent() && now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let now = Instant::now();
        let n1 = Notification::new(Severity::Success, "test", Duration::ZERO, now);
        let n2 = Notification::new(Severity::Success, "test", Duration::ZERO, now);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn default_durations_match_severity() {
        assert_eq!(Severity::Success.default_duration(), Duration::from_millis(5000));
        assert_eq!(Severity::Info.default_duration(), Duration::from_millis(5000));
        assert_eq!(Severity::Warning.default_duration(), Duration::from_millis(6000));
        assert_eq!(Severity::Error.default_duration(), Duration::from_millis(7000));
    }

    #[test]
    fn icons_and_classes_are_distinct() {
        let all = [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.icon(), b.icon());
                assert_ne!(a.class_name(), b.class_name());
            }
        }
    }

    #[test]
    fn expires_exactly_at_duration() {
        let start = Instant::now();
        let n = Notification::new(Severity::Info, "hi", Duration::from_millis(500), start);
        assert!(!n.is_expired_at(start + Duration::from_millis(499)));
        assert!(n.is_expired_at(start + Duration::from_millis(500)));
    }

    #[test]
    fn zero_duration_never_expires() {
        let start = Instant::now();
        let n = Notification::new(Severity::Error, "stuck", Duration::ZERO, start);
        assert!(n.is_persistent());
        assert!(!n.is_expired_at(start + Duration::from_secs(3600)));
    }
}
