// SPDX-License-Identifier: MPL-2.0
//! Page root state and orchestration between the components.
//!
//! The `Page` owns one instance of every component and translates messages
//! into state changes and [`Effect`]s. Adapters feed it platform events and
//! carry out the effects it returns; they never mutate components directly.
//!
//! # Example
//!
//! ```no_run
//! use lookalike::app::{Effect, Message, Page};
//! use lookalike::config;
//! use lookalike::domain::selection::FileCandidate;
//!
//! let (config, _warning) = config::load();
//! let mut page = Page::new(config);
//! page.update(Message::AddFiles(vec![FileCandidate::new(
//!     "cat.jpg",
//!     "image/jpeg",
//!     vec![0xFF, 0xD8],
//! )]));
//! if let Effect::StartSearch(_request) = page.update(Message::Submit) {
//!     // hand the request to a SearchBackend, then dispatch SearchCompleted
//! }
//! ```

mod message;
mod view;

pub use message::{Effect, Message};
pub use view::{FileRow, PageView, ResultTile, SUBMITTING_LABEL, SUBMIT_LABEL};

use crate::application::port::SearchBackend;
use crate::application::{SubmissionController, SubmissionOutcome};
use crate::config::Config;
use crate::domain::matching::{ResultSet, SortCriterion};
use crate::domain::selection::{FileCandidate, FileSelectionSet};
use crate::ui::gallery::GalleryViewer;
use crate::ui::notifications::Notifier;

/// Shown when a batch contained files that are not images.
pub const NON_IMAGE_MESSAGE: &str = "Only image files are allowed";

/// Composition root for the upload page.
#[derive(Debug)]
pub struct Page {
    config: Config,
    notifier: Notifier,
    selection: FileSelectionSet,
    submission: SubmissionController,
    results: ResultSet,
    /// Whether the results region is shown. Cleared when a search starts.
    results_visible: bool,
    gallery: GalleryViewer,
    drop_highlight: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Page {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            notifier: Notifier::with_durations(config.notifications.clone()),
            selection: FileSelectionSet::new(config.quota()),
            submission: SubmissionController::new(),
            results: ResultSet::default(),
            results_visible: false,
            gallery: GalleryViewer::new(config.swipe_threshold()),
            drop_highlight: false,
            config,
        }
    }

    /// Applies a message and returns the effect the adapter must perform.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::AddFiles(candidates) => {
                if !self.selection_locked("add") {
                    self.add_files(candidates);
                }
                Effect::None
            }
            Message::RemoveFile(index) => {
                if !self.selection_locked("remove") {
                    if let Err(err) = self.selection.remove(index) {
                        tracing::warn!(error = %err, "ignoring remove request");
                    }
                }
                Effect::None
            }
            Message::ClearSelection => {
                if !self.selection_locked("clear") {
                    self.selection.clear();
                }
                Effect::None
            }
            Message::DragEnter => {
                self.drop_highlight = true;
                Effect::None
            }
            Message::DragLeave => {
                self.drop_highlight = false;
                Effect::None
            }
            Message::Drop(candidates) => {
                self.drop_highlight = false;
                if !self.selection_locked("drop") {
                    self.add_files(candidates);
                }
                Effect::None
            }
            Message::Submit => self.begin_submit(),
            Message::SearchCompleted(result) => {
                let outcome = self.submission.finish(result, &mut self.notifier);
                self.apply_outcome(outcome)
            }
            Message::SortResults(criterion) => {
                self.sort_results(criterion);
                Effect::None
            }
            Message::OpenGallery(index) => {
                self.gallery.open(&self.results, index);
                Effect::None
            }
            Message::CloseGallery => {
                self.gallery.close();
                Effect::None
            }
            Message::Navigate(direction) => {
                self.gallery.navigate(&self.results, direction);
                Effect::None
            }
            Message::GalleryKey(key) => {
                self.gallery.handle_key(&self.results, key);
                Effect::None
            }
            Message::GalleryPointer(target) => {
                self.gallery.handle_pointer(&self.results, target);
                Effect::None
            }
            Message::TouchStart(position) => {
                self.gallery.touch_start(position);
                Effect::None
            }
            Message::TouchMove(position) => {
                if self.gallery.touch_move(position) {
                    Effect::SuppressScroll
                } else {
                    Effect::None
                }
            }
            Message::TouchEnd(position) => {
                self.gallery.touch_end(&self.results, position);
                Effect::None
            }
            Message::Notification(message) => {
                self.notifier.handle_message(&message);
                Effect::None
            }
        }
    }

    /// Runs a full submission against `backend`, awaiting the reply inline.
    ///
    /// Returns [`Effect::None`] when the submission did not start.
    pub async fn submit<B: SearchBackend>(&mut self, backend: &B) -> Effect {
        let Effect::StartSearch(request) = self.begin_submit() else {
            return Effect::None;
        };
        let result = backend.search(request).await;
        self.update(Message::SearchCompleted(result))
    }

    /// The selection is frozen while a submission is in flight.
    fn selection_locked(&self, action: &'static str) -> bool {
        let locked = self.submission.is_in_flight();
        if locked {
            tracing::debug!(action, "selection change ignored while submitting");
        }
        locked
    }

    fn add_files(&mut self, candidates: Vec<FileCandidate>) {
        let report = self.selection.add(candidates);
        if report.has_non_images() {
            self.notifier.warning(NON_IMAGE_MESSAGE);
        }
        if let Some(err) = report.rejected {
            self.notifier.error(err.to_string());
        }
    }

    fn begin_submit(&mut self) -> Effect {
        let Some(request) = self.submission.begin(&self.selection) else {
            return Effect::None;
        };
        self.results = ResultSet::default();
        self.results_visible = false;
        self.gallery.close();
        Effect::StartSearch(request)
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) -> Effect {
        match outcome {
            SubmissionOutcome::Matches(results) => {
                self.gallery.close();
                self.results = results;
                self.results_visible = true;
                self.selection.clear();
                Effect::ScrollResultsIntoView
            }
            SubmissionOutcome::NoMatches | SubmissionOutcome::Failed(_) => Effect::None,
        }
    }

    fn sort_results(&mut self, criterion: SortCriterion) {
        let shown = self.gallery.active_record(&self.results).cloned();
        self.results.sort(criterion);
        if let Some(record) = shown {
            self.gallery.reanchor(&self.results, &record);
        }
    }

    /// Builds a render snapshot of the current state.
    #[must_use]
    pub fn view(&self) -> PageView<'_> {
        PageView::build(self)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[must_use]
    pub fn selection(&self) -> &FileSelectionSet {
        &self.selection
    }

    #[must_use]
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryViewer {
        &self.gallery
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_flight()
    }

    #[must_use]
    pub fn drop_highlight(&self) -> bool {
        self.drop_highlight
    }
}
