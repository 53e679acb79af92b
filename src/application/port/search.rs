// SPDX-License-Identifier: MPL-2.0
//! Search backend port definition.
//!
//! This module defines the [`SearchBackend`] trait through which the
//! submission use case reaches the similarity-search service.
//!
//! # Design Notes
//!
//! - The request carries the staged files verbatim, one part per file
//! - A non-2xx answer is a [`SearchReply::Rejected`], not an error: the
//!   backend spoke, it just said no
//! - [`BackendError`] is reserved for failures where no usable reply exists
//!   (network down, body not parseable)

use crate::domain::matching::MatchRecord;
use crate::domain::selection::{FileSelectionSet, PendingFile};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// BackendError
// =============================================================================

/// Failures where the backend produced no usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected JSON shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The request could not be assembled (bad endpoint, bad content type).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// =============================================================================
// SearchRequest
// =============================================================================

/// One file part of the multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub name: String,
    pub content_type: String,
    pub data: Arc<Vec<u8>>,
}

impl From<&PendingFile> for UploadPart {
    fn from(file: &PendingFile) -> Self {
        Self {
            name: file.name().to_string(),
            content_type: file.content_type().to_string(),
            data: Arc::clone(file.data()),
        }
    }
}

/// A single search submission: every staged file, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    parts: Vec<UploadPart>,
}

impl SearchRequest {
    /// Packages the current selection.
    #[must_use]
    pub fn from_selection(selection: &FileSelectionSet) -> Self {
        Self {
            parts: selection.files().iter().map(UploadPart::from).collect(),
        }
    }

    /// Builds a request from explicit parts.
    #[must_use]
    pub fn from_parts(parts: Vec<UploadPart>) -> Self {
        Self { parts }
    }

    #[must_use]
    pub fn parts(&self) -> &[UploadPart] {
        &self.parts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total payload size in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.parts.iter().map(|p| p.data.len() as u64).sum()
    }
}

// =============================================================================
// SearchReply
// =============================================================================

/// What the backend answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchReply {
    /// 2xx response with a parsed body.
    Completed {
        success: bool,
        /// Empty when the body had no `files` array.
        matches: Vec<MatchRecord>,
        detail: Option<String>,
    },

    /// Non-2xx response.
    Rejected {
        /// Canonical status text, e.g. `"500 Internal Server Error"`.
        status: String,
        /// `detail` field from the error body, if any.
        detail: Option<String>,
    },
}

impl SearchReply {
    /// Convenience constructor for a successful reply.
    #[must_use]
    pub fn matches(matches: Vec<MatchRecord>) -> Self {
        Self::Completed {
            success: true,
            matches,
            detail: None,
        }
    }
}

// =============================================================================
// SearchBackend
// =============================================================================

/// Trait for similarity-search backends.
///
/// Implementations must be cheap to share; the controller only borrows them.
pub trait SearchBackend {
    /// Sends the request and waits for the reply.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when no reply could be obtained or decoded.
    fn search(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<SearchReply, BackendError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::{FileCandidate, FileQuota};

    #[test]
    fn request_preserves_selection_order() {
        let mut selection = FileSelectionSet::new(FileQuota::default());
        selection.add(vec![
            FileCandidate::new("b.png", "image/png", vec![1, 2]),
            FileCandidate::new("a.jpg", "image/jpeg", vec![3]),
        ]);

        let request = SearchRequest::from_selection(&selection);
        let names: Vec<_> = request.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.jpg"]);
        assert_eq!(request.total_bytes(), 3);
        assert_eq!(request.parts()[1].content_type, "image/jpeg");
    }

    #[test]
    fn empty_selection_yields_empty_request() {
        let request = SearchRequest::from_selection(&FileSelectionSet::default());
        assert!(request.is_empty());
        assert_eq!(request.len(), 0);
    }

    #[test]
    fn backend_error_display() {
        assert_eq!(
            BackendError::Network("refused".into()).to_string(),
            "network error: refused"
        );
    }
}
