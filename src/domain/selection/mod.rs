// SPDX-License-Identifier: MPL-2.0
//! Upload selection domain.
//!
//! A [`FileSelectionSet`] is the bounded, deduplicated list of files staged for
//! a similarity search. Candidates enter through [`FileSelectionSet::add`],
//! which admits image files only and rejects a whole batch that would exceed
//! the [`FileQuota`].

mod file;
mod quota;
mod set;

pub use file::{content_type_for_path, FileCandidate, FileIdentity, PendingFile};
pub use quota::FileQuota;
pub use set::{AddReport, FileSelectionSet, SelectionError};
