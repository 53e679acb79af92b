// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core business rules for staging files and holding matches.
//!
//! This module contains pure domain types and value objects. It has no
//! presentation or network dependencies, so it can be exercised without a
//! rendered page or a live backend.
//!
//! # Modules
//!
//! - [`selection`]: Staged uploads ([`FileSelectionSet`](selection::FileSelectionSet),
//!   [`FileQuota`](selection::FileQuota), [`PendingFile`](selection::PendingFile))
//! - [`matching`]: Search results ([`ResultSet`](matching::ResultSet),
//!   [`MatchRecord`](matching::MatchRecord))

pub mod matching;
pub mod selection;
