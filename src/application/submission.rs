// SPDX-License-Identifier: MPL-2.0
//! Search submission use case.
//!
//! A submission runs in two phases so the caller can keep its event loop
//! responsive while the request is on the wire:
//!
//! 1. [`SubmissionController::begin`] claims the in-flight slot and packages
//!    the selection.
//! 2. [`SubmissionController::finish`] maps the backend outcome to exactly one
//!    notification and releases the slot.
//!
//! [`SubmissionController::submit`] chains both for callers that can simply
//! await.

use super::port::{BackendError, SearchBackend, SearchReply, SearchRequest};
use crate::domain::matching::ResultSet;
use crate::domain::selection::FileSelectionSet;
use crate::ui::notifications::Notifier;

/// Shown when the backend could not be reached or answered garbage.
pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred during upload";

/// Shown when the backend reported `success: false` without a detail.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed";

/// Shown when a successful search returned nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matches found";

/// How a settled submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The backend returned at least one match.
    Matches(ResultSet),
    /// The search succeeded but found nothing.
    NoMatches,
    /// Any failure; carries the text shown to the user.
    Failed(String),
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Guards against overlapping submissions and turns replies into outcomes.
#[derive(Debug, Default)]
pub struct SubmissionController {
    in_flight: bool,
}

impl SubmissionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Starts a submission.
    ///
    /// Returns `None` without side effects when the selection is empty or
    /// another submission is still in flight.
    pub fn begin(&mut self, selection: &FileSelectionSet) -> Option<SearchRequest> {
        if self.in_flight || selection.is_empty() {
            return None;
        }
        self.in_flight = true;
        let request = SearchRequest::from_selection(selection);
        tracing::info!(
            files = request.len(),
            bytes = request.total_bytes(),
            "submitting search"
        );
        Some(request)
    }

    /// Settles a submission and reports it through `notifier`.
    ///
    /// Always clears the in-flight flag and always shows exactly one
    /// notification.
    pub fn finish(
        &mut self,
        result: Result<SearchReply, BackendError>,
        notifier: &mut Notifier,
    ) -> SubmissionOutcome {
        self.in_flight = false;

        let outcome = match result {
            Ok(SearchReply::Completed {
                success: true,
                matches,
                ..
            }) => {
                if matches.is_empty() {
                    SubmissionOutcome::NoMatches
                } else {
                    SubmissionOutcome::Matches(ResultSet::new(matches))
                }
            }
            Ok(SearchReply::Completed {
                success: false,
                detail,
                ..
            }) => SubmissionOutcome::Failed(
                detail.unwrap_or_else(|| SEARCH_FAILED_MESSAGE.to_string()),
            ),
            Ok(SearchReply::Rejected { status, detail }) => {
                tracing::warn!(%status, "search rejected by backend");
                SubmissionOutcome::Failed(detail.unwrap_or(status))
            }
            Err(err) => {
                tracing::error!(error = %err, "search submission failed");
                SubmissionOutcome::Failed(UPLOAD_FAILED_MESSAGE.to_string())
            }
        };

        match &outcome {
            SubmissionOutcome::Matches(results) => {
                tracing::info!(matches = results.len(), "search completed");
                notifier.success(format!("Found {} similar images", results.len()));
            }
            SubmissionOutcome::NoMatches => {
                tracing::info!("search completed without matches");
                notifier.warning(NO_MATCHES_MESSAGE);
            }
            SubmissionOutcome::Failed(message) => {
                notifier.error(message.clone());
            }
        }
        outcome
    }

    /// Runs a whole submission against `backend`.
    ///
    /// Returns `None` when [`begin`](Self::begin) refused to start.
    pub async fn submit<B: SearchBackend>(
        &mut self,
        backend: &B,
        selection: &FileSelectionSet,
        notifier: &mut Notifier,
    ) -> Option<SubmissionOutcome> {
        let request = self.begin(selection)?;
        let result = backend.search(request).await;
        Some(self.finish(result, notifier))
    }
}
