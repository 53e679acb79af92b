// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Upload**: Selection quota and search endpoint
//! - **Gallery**: Swipe gesture threshold
//! - **Notifications**: Auto-dismiss durations per severity

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Default maximum number of files staged before submission.
pub const DEFAULT_MAX_FILES: u32 = 5;

/// Minimum allowed selection quota.
pub const MIN_MAX_FILES: u32 = 1;

/// Maximum allowed selection quota.
pub const MAX_MAX_FILES: u32 = 50;

/// Default search endpoint (the serving origin's root path).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/";

/// Multipart field name shared by every uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "files";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default minimum displacement (screen units) for a touch movement to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 500.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss for success notifications (milliseconds).
pub const DEFAULT_SUCCESS_MS: u64 = 5000;

/// Default auto-dismiss for info notifications (milliseconds).
pub const DEFAULT_INFO_MS: u64 = 5000;

/// Default auto-dismiss for warning notifications (milliseconds).
pub const DEFAULT_WARNING_MS: u64 = 6000;

/// Default auto-dismiss for error notifications (milliseconds).
pub const DEFAULT_ERROR_MS: u64 = 7000;
