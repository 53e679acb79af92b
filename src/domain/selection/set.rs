// SPDX-License-Identifier: MPL-2.0
//! Bounded, deduplicated selection of staged files.

use super::file::{FileCandidate, FileIdentity, PendingFile};
use super::quota::FileQuota;
use thiserror::Error;

/// Errors raised by selection mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The batch would overflow the quota; nothing was admitted.
    #[error("Can only add {available} more files (maximum {quota} files)")]
    QuotaExceeded { available: usize, quota: u32 },

    /// `remove` was called with a position past the end of the selection.
    #[error("index {index} is out of range for a selection of {len} files")]
    IndexOutOfRange { index: usize, len: usize },

    /// A replacement sequence contained two files with the same identity.
    #[error("duplicate file in selection: {name}")]
    DuplicateFile { name: String },
}

/// Summary of a single [`FileSelectionSet::add`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    /// Number of files appended to the selection.
    pub added: usize,
    /// Image files skipped because an identical (name, size) file was already staged.
    pub duplicates: usize,
    /// Names of candidates rejected for not being images.
    pub non_images: Vec<String>,
    /// Set when the whole batch was refused for exceeding the quota.
    pub rejected: Option<SelectionError>,
}

impl AddReport {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejected.is_some()
    }

    #[must_use]
    pub fn has_non_images(&self) -> bool {
        !self.non_images.is_empty()
    }

    /// Returns whether the selection changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

/// Ordered sequence of staged files.
///
/// Insertion order is preserved, no two files share a (name, size) identity
/// and the length never exceeds the quota. Every mutation bumps
/// [`version`](Self::version) so renderers can detect stale views.
#[derive(Debug, Clone, Default)]
pub struct FileSelectionSet {
    files: Vec<PendingFile>,
    quota: FileQuota,
    version: u64,
}

impl FileSelectionSet {
    /// Creates an empty selection bounded by `quota`.
    #[must_use]
    pub fn new(quota: FileQuota) -> Self {
        Self {
            files: Vec::new(),
            quota,
            version: 0,
        }
    }

    /// Offers a batch of candidates to the selection.
    ///
    /// Non-image candidates are dropped and reported. If the remaining image
    /// candidates outnumber the free slots, the batch is refused as a whole.
    /// Otherwise each image is appended unless its identity is already staged.
    pub fn add(&mut self, candidates: impl IntoIterator<Item = FileCandidate>) -> AddReport {
        let mut report = AddReport::default();
        let mut images = Vec::new();
        for candidate in candidates {
            if candidate.is_image() {
                images.push(candidate);
            } else {
                report.non_images.push(candidate.name);
            }
        }

        let available = self.available_slots();
        if images.len() > available {
            tracing::debug!(
                offered = images.len(),
                available,
                "selection batch rejected by quota"
            );
            report.rejected = Some(SelectionError::QuotaExceeded {
                available,
                quota: self.quota.value(),
            });
            return report;
        }

        for candidate in images {
            if self.contains(&candidate.identity()) {
                report.duplicates += 1;
            } else {
                self.files.push(PendingFile::from(candidate));
                report.added += 1;
            }
        }

        if report.changed() {
            self.version += 1;
        }
        report
    }

    /// Removes and returns the file at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfRange`] when `index` is not a valid position.
    pub fn remove(&mut self, index: usize) -> Result<PendingFile, SelectionError> {
        if index >= self.files.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }
        self.version += 1;
        Ok(self.files.remove(index))
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        if !self.files.is_empty() {
            self.files.clear();
            self.version += 1;
        }
    }

    /// Replaces the whole selection with `files`.
    ///
    /// # Errors
    ///
    /// Fails without modifying the selection if `files` exceeds the quota or
    /// contains two files with the same identity.
    pub fn replace(&mut self, files: Vec<PendingFile>) -> Result<(), SelectionError> {
        if files.len() > self.quota.as_len() {
            return Err(SelectionError::QuotaExceeded {
                available: self.quota.as_len(),
                quota: self.quota.value(),
            });
        }
        for (i, file) in files.iter().enumerate() {
            if files[..i]
                .iter()
                .any(|f| f.same_identity(&file.identity()))
            {
                return Err(SelectionError::DuplicateFile {
                    name: file.name().to_string(),
                });
            }
        }
        self.files = files;
        self.version += 1;
        Ok(())
    }

    /// Returns whether a file with this (name, size) identity is staged.
    #[must_use]
    pub fn contains(&self, identity: &FileIdentity) -> bool {
        self.files.iter().any(|f| f.same_identity(identity))
    }

    #[must_use]
    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PendingFile> {
        self.files.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns whether no more files can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.files.len() >= self.quota.as_len()
    }

    /// Number of files that can still be staged.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.quota.as_len().saturating_sub(self.files.len())
    }

    #[must_use]
    pub fn quota(&self) -> FileQuota {
        self.quota
    }

    /// Monotonic counter bumped on every mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}
