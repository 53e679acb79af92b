// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and effects for the page.

use crate::application::port::{BackendError, SearchReply, SearchRequest};
use crate::domain::matching::SortCriterion;
use crate::domain::selection::FileCandidate;
use crate::ui::gallery::{Direction, Key, PointerTarget, TouchPoint};
use crate::ui::notifications;

/// Messages consumed by `Page::update`. Platform adapters translate native
/// events into these and never touch component state directly.
#[derive(Debug, Clone)]
pub enum Message {
    /// Files chosen through the file picker.
    AddFiles(Vec<FileCandidate>),
    /// Remove the staged file at this position.
    RemoveFile(usize),
    ClearSelection,
    /// A drag carrying files entered the drop zone.
    DragEnter,
    /// The drag left the drop zone without dropping.
    DragLeave,
    /// Files were dropped on the drop zone.
    Drop(Vec<FileCandidate>),
    /// The submit button was activated.
    Submit,
    /// The backend answered (or failed to) a previously started search.
    SearchCompleted(Result<SearchReply, BackendError>),
    SortResults(SortCriterion),
    /// A result thumbnail at this position was activated.
    OpenGallery(usize),
    CloseGallery,
    Navigate(Direction),
    GalleryKey(Key),
    GalleryPointer(PointerTarget),
    TouchStart(TouchPoint),
    TouchMove(TouchPoint),
    /// Lift-off position, when the platform reports one.
    TouchEnd(Option<TouchPoint>),
    Notification(notifications::NotificationMessage),
}

/// Side effects the adapter must carry out after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Send this request to the search backend, then dispatch
    /// [`Message::SearchCompleted`] with the answer.
    StartSearch(SearchRequest),
    /// Bring the results region into view.
    ScrollResultsIntoView,
    /// Cancel default scrolling for the current touch-move event.
    SuppressScroll,
}
