// SPDX-License-Identifier: MPL-2.0
//! Selection quota domain type.
//!
//! This module provides a type-safe wrapper for the maximum number of files
//! a user may stage before submitting a search.

use crate::config::{DEFAULT_MAX_FILES, MAX_MAX_FILES, MIN_MAX_FILES};

/// Maximum number of staged files.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–50).
///
/// # Example
///
/// ```
/// use lookalike::domain::selection::FileQuota;
///
/// let quota = FileQuota::new(5);
/// assert_eq!(quota.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = FileQuota::new(100);
/// assert_eq!(too_high.value(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileQuota(u32);

impl FileQuota {
    /// Creates a new quota, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_MAX_FILES, MAX_MAX_FILES))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the quota as a collection length.
    #[must_use]
    pub fn as_len(self) -> usize {
        self.0 as usize
    }
}

impl Default for FileQuota {
    fn default() -> Self {
        Self(DEFAULT_MAX_FILES)
    }
}
