// SPDX-License-Identifier: MPL-2.0
//! Files offered by the user and files staged for upload.

use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Content type sent when the extension is not a recognized image format.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Image extensions and their MIME types.
const IMAGE_CONTENT_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/x-icon"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
];

/// Guesses a content type from the file extension (case-insensitive).
#[must_use]
pub fn content_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            IMAGE_CONTENT_TYPES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(ext))
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// A raw file descriptor offered by a picker or a drop, not yet validated.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    /// MIME type as reported by the platform (may be empty).
    pub content_type: String,
    pub data: Arc<Vec<u8>>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: Arc::new(data),
        }
    }

    /// Reads a local file, deriving the content type from its extension.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, content_type_for_path(path), data))
    }

    /// Only `image/*` content types are admissible for search.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    #[must_use]
    pub fn byte_size(&self) -> u64 {
        self.data.len() as u64
    }

    #[must_use]
    pub fn identity(&self) -> FileIdentity {
        FileIdentity {
            name: self.name.clone(),
            byte_size: self.byte_size(),
        }
    }
}

/// Deduplication key: two files are the same when name and size match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub name: String,
    pub byte_size: u64,
}

/// An image file staged for submission. Immutable once created.
#[derive(Debug, Clone)]
pub struct PendingFile {
    name: String,
    byte_size: u64,
    content_type: String,
    data: Arc<Vec<u8>>,
}

impl PendingFile {
    /// Returns the original file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the shared payload.
    #[must_use]
    pub fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }

    #[must_use]
    pub fn identity(&self) -> FileIdentity {
        FileIdentity {
            name: self.name.clone(),
            byte_size: self.byte_size,
        }
    }

    /// Returns whether this file has the given (name, size) identity.
    #[must_use]
    pub fn same_identity(&self, identity: &FileIdentity) -> bool {
        self.name == identity.name && self.byte_size == identity.byte_size
    }
}

impl From<FileCandidate> for PendingFile {
    fn from(candidate: FileCandidate) -> Self {
        let byte_size = candidate.byte_size();
        Self {
            name: candidate.name,
            byte_size,
            content_type: candidate.content_type,
            data: candidate.data,
        }
    }
}
