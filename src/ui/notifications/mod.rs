// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report validation problems, search
//! outcomes and failures without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Notifier` for display and lifecycle management
//!
//! # Usage
//!
//! ```
//! use lookalike::ui::notifications::{Notifier, Severity};
//! use std::time::Duration;
//!
//! let mut notifier = Notifier::new();
//! notifier.show("Search complete", Severity::Success, None);
//! notifier.show("Backend unreachable", Severity::Error, Some(Duration::ZERO));
//! assert_eq!(notifier.visible_count(), 2);
//! ```
//!
//! # Design Considerations
//!
//! - Default durations: 5s success/info, 6s warning, 7s error
//! - A zero duration is persistent until dismissed
//! - Timers are driven by `tick(now)` so the adapter owns the clock

mod manager;
mod notification;

pub use manager::{Message as NotificationMessage, Notifier};
pub use notification::{Notification, NotificationId, Severity};
