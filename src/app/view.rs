// SPDX-License-Identifier: MPL-2.0
//! Render snapshot of the page.
//!
//! A `PageView` borrows from the `Page` and holds everything a renderer needs.
//! Renderers should treat it as read-only and rebuild it after every update.

use super::Page;
use crate::domain::matching::{MatchRecord, SortCriterion};
use crate::ui::format::format_file_size;
use crate::ui::gallery::GalleryFrame;
use crate::ui::notifications::Notification;

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Upload Files";

/// Submit button label while a search is in flight.
pub const SUBMITTING_LABEL: &str = "Uploading...";

/// One line of the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow<'a> {
    pub index: usize,
    pub name: &'a str,
    pub size_label: String,
}

/// One thumbnail of the results grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTile<'a> {
    pub index: usize,
    pub record: &'a MatchRecord,
    pub similarity_percent: u8,
}

#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub add_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    /// The drop zone is being hovered by a drag.
    pub drop_highlight: bool,
    pub files: Vec<FileRow<'a>>,
    /// `None` while the results region is hidden.
    pub results: Option<Vec<ResultTile<'a>>>,
    pub sorted_by: Option<SortCriterion>,
    pub gallery: Option<GalleryFrame<'a>>,
    /// Visible notifications, oldest first.
    pub notifications: Vec<&'a Notification>,
}

impl<'a> PageView<'a> {
    pub(super) fn build(page: &'a Page) -> Self {
        let in_flight = page.is_submitting();
        let files = page
            .selection()
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| FileRow {
                index,
                name: file.name(),
                size_label: format_file_size(file.byte_size()),
            })
            .collect();

        let results = page.results_visible().then(|| {
            page.results()
                .iter()
                .enumerate()
                .map(|(index, record)| ResultTile {
                    index,
                    record,
                    similarity_percent: record.similarity_percent(),
                })
                .collect()
        });

        Self {
            add_enabled: !in_flight && !page.selection().is_full(),
            submit_enabled: !in_flight,
            submit_label: if in_flight {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            drop_highlight: page.drop_highlight(),
            files,
            results,
            sorted_by: page.results().sorted_by(),
            gallery: page.gallery().frame(page.results()),
            notifications: page.notifier().visible().collect(),
        }
    }
}
