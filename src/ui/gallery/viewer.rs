// SPDX-License-Identifier: MPL-2.0
//! Full-screen single-image browser over a [`ResultSet`].
//!
//! The viewer stores only its position; the result set is passed in on every
//! call so a re-sorted or replaced set is always read fresh.

use super::gesture::{SwipeThreshold, SwipeTracker, TouchPoint};
use super::input::{map_key, map_pointer, map_swipe, Direction, GalleryCommand, Key, PointerTarget};
use crate::domain::matching::{MatchRecord, ResultSet};

/// Viewer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Closed,
    /// `active_index` is always a valid position in the current result set.
    Open { active_index: usize },
}

/// Everything a renderer needs to draw the open viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFrame<'a> {
    pub record: &'a MatchRecord,
    pub index: usize,
    pub total: usize,
    pub similarity_percent: u8,
    /// Enlarged image source.
    pub image_uri: &'a str,
    /// Original-resolution download target.
    pub download_uri: &'a str,
    pub show_previous: bool,
    pub show_next: bool,
}

/// Gallery viewer state machine.
#[derive(Debug, Clone, Default)]
pub struct GalleryViewer {
    state: GalleryState,
    swipe: SwipeTracker,
}

impl GalleryViewer {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            state: GalleryState::Closed,
            swipe: SwipeTracker::new(threshold),
        }
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, GalleryState::Open { .. })
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            GalleryState::Open { active_index } => Some(active_index),
            GalleryState::Closed => None,
        }
    }

    /// Opens the viewer on `index`.
    ///
    /// Returns `false` (and stays closed) if the set is empty or `index` is out of range.
    pub fn open(&mut self, results: &ResultSet, index: usize) -> bool {
        if index >= results.len() {
            return false;
        }
        self.state = GalleryState::Open {
            active_index: index,
        };
        self.swipe.cancel();
        true
    }

    /// Closes the viewer. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = GalleryState::Closed;
        self.swipe.cancel();
        was_open
    }

    /// Moves one step in `direction`, clamped to the ends of the set.
    ///
    /// Returns `true` if the active index changed. No wraparound.
    pub fn navigate(&mut self, results: &ResultSet, direction: Direction) -> bool {
        let Some(current) = self.active_index() else {
            return false;
        };
        let Some(target) = current.checked_add_signed(direction.step()) else {
            return false;
        };
        if target >= results.len() {
            return false;
        }
        self.state = GalleryState::Open {
            active_index: target,
        };
        true
    }

    /// Points the open viewer back at `record` after the set was re-ordered.
    ///
    /// Closes the viewer if the record is no longer present.
    pub fn reanchor(&mut self, results: &ResultSet, record: &MatchRecord) {
        if !self.is_open() {
            return;
        }
        match results.position_of(record) {
            Some(index) => {
                self.state = GalleryState::Open {
                    active_index: index,
                }
            }
            None => {
                self.close();
            }
        }
    }

    /// Returns the record currently displayed.
    #[must_use]
    pub fn active_record<'a>(&self, results: &'a ResultSet) -> Option<&'a MatchRecord> {
        self.active_index().and_then(|i| results.get(i))
    }

    /// Builds the render snapshot; `None` when closed or the set is empty.
    #[must_use]
    pub fn frame<'a>(&self, results: &'a ResultSet) -> Option<GalleryFrame<'a>> {
        let index = self.active_index()?;
        let record = results.get(index)?;
        let last = results.last_index()?;
        Some(GalleryFrame {
            record,
            index,
            total: results.len(),
            similarity_percent: record.similarity_percent(),
            image_uri: record.resized_uri(),
            download_uri: record.original_uri(),
            show_previous: index > 0,
            show_next: index < last,
        })
    }

    /// Applies a translated command. Returns `true` if the viewer changed.
    pub fn apply(&mut self, results: &ResultSet, command: GalleryCommand) -> bool {
        match command {
            GalleryCommand::None => false,
            GalleryCommand::Navigate(direction) => self.navigate(results, direction),
            GalleryCommand::Close => self.close(),
        }
    }

    /// Handles a key press. Keys are ignored while closed.
    pub fn handle_key(&mut self, results: &ResultSet, key: Key) -> GalleryCommand {
        if !self.is_open() {
            return GalleryCommand::None;
        }
        let command = map_key(key);
        self.apply(results, command);
        command
    }

    /// Handles a click inside the viewer.
    pub fn handle_pointer(&mut self, results: &ResultSet, target: PointerTarget) -> GalleryCommand {
        if !self.is_open() {
            return GalleryCommand::None;
        }
        let command = map_pointer(target);
        self.apply(results, command);
        command
    }

    pub fn touch_start(&mut self, position: TouchPoint) {
        if self.is_open() {
            self.swipe.start(position);
        }
    }

    /// Returns `true` when the adapter should suppress default scrolling.
    pub fn touch_move(&mut self, position: TouchPoint) -> bool {
        self.is_open() && self.swipe.moved(position)
    }

    /// Completes a touch sequence and applies the resulting swipe, if any.
    pub fn touch_end(&mut self, results: &ResultSet, position: Option<TouchPoint>) -> GalleryCommand {
        if !self.is_open() {
            self.swipe.cancel();
            return GalleryCommand::None;
        }
        let command = self
            .swipe
            .finish(position)
            .map_or(GalleryCommand::None, map_swipe);
        self.apply(results, command);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matching::SortCriterion;

    fn results(n: usize) -> ResultSet {
        ResultSet::new(
            (0..n)
                .map(|i| {
                    MatchRecord::new(
                        format!("img-{i}.jpg"),
                        i as f64 / 10.0,
                        format!("/resized/img-{i}.jpg"),
                        format!("/original/img-{i}.jpg"),
                    )
                })
                .collect(),
        )
    }

    fn open_at(set: &ResultSet, index: usize) -> GalleryViewer {
        let mut viewer = GalleryViewer::default();
        assert!(viewer.open(set, index));
        viewer
    }

    #[test]
    fn opening_empty_set_is_noop() {
        let mut viewer = GalleryViewer::default();
        assert!(!viewer.open(&ResultSet::default(), 0));
        assert!(!viewer.is_open());
        assert!(viewer.frame(&ResultSet::default()).is_none());
    }

    #[test]
    fn opening_out_of_range_is_noop() {
        let mut viewer = GalleryViewer::default();
        assert!(!viewer.open(&results(2), 2));
        assert_eq!(viewer.state(), GalleryState::Closed);
    }

    #[test]
    fn navigate_clamps_at_both_ends() {
        let set = results(3);
        let mut viewer = open_at(&set, 0);
        assert!(!viewer.navigate(&set, Direction::Previous));
        assert_eq!(viewer.active_index(), Some(0));

        let mut viewer = open_at(&set, 2);
        assert!(!viewer.navigate(&set, Direction::Next));
        assert_eq!(viewer.active_index(), Some(2));
    }

    #[test]
    fn navigate_takes_one_step_from_interior() {
        let set = results(5);
        let mut viewer = open_at(&set, 2);
        assert!(viewer.navigate(&set, Direction::Next));
        assert_eq!(viewer.active_index(), Some(3));
        assert!(viewer.navigate(&set, Direction::Previous));
        assert!(viewer.navigate(&set, Direction::Previous));
        assert_eq!(viewer.active_index(), Some(1));
    }

    #[test]
    fn navigate_while_closed_does_nothing() {
        let set = results(3);
        let mut viewer = GalleryViewer::default();
        assert!(!viewer.navigate(&set, Direction::Next));
        assert!(!viewer.is_open());
    }

    #[test]
    fn frame_hides_controls_at_edges() {
        let set = results(3);
        let viewer = open_at(&set, 0);
        let frame = viewer.frame(&set).expect("open viewer has a frame");
        assert!(!frame.show_previous);
        assert!(frame.show_next);
        assert_eq!(frame.download_uri, "/original/img-0.jpg");
        assert_eq!(frame.image_uri, "/resized/img-0.jpg");
        assert_eq!(frame.similarity_percent, 100);

        let viewer = open_at(&set, 2);
        let frame = viewer.frame(&set).expect("open viewer has a frame");
        assert!(frame.show_previous);
        assert!(!frame.show_next);
        assert_eq!(frame.similarity_percent, 80);
    }

    #[test]
    fn single_record_shows_no_arrows() {
        let set = results(1);
        let frame = open_at(&set, 0).frame(&set).expect("frame");
        assert!(!frame.show_previous && !frame.show_next);
    }

    #[test]
    fn keyboard_only_acts_while_open() {
        let set = results(3);
        let mut viewer = GalleryViewer::default();
        assert_eq!(viewer.handle_key(&set, Key::ArrowRight), GalleryCommand::None);

        viewer.open(&set, 1);
        viewer.handle_key(&set, Key::ArrowRight);
        assert_eq!(viewer.active_index(), Some(2));
        viewer.handle_key(&set, Key::ArrowLeft);
        assert_eq!(viewer.active_index(), Some(1));
        viewer.handle_key(&set, Key::Escape);
        assert!(!viewer.is_open());
    }

    #[test]
    fn background_click_closes_but_image_click_does_not() {
        let set = results(2);
        let mut viewer = open_at(&set, 0);
        viewer.handle_pointer(&set, PointerTarget::Image);
        assert!(viewer.is_open());
        viewer.handle_pointer(&set, PointerTarget::Background);
        assert!(!viewer.is_open());
    }

    #[test]
    fn horizontal_swipe_navigates_once() {
        let set = results(3);
        let mut viewer = open_at(&set, 0);
        viewer.touch_start(TouchPoint::new(200.0, 100.0));
        let command = viewer.touch_end(&set, Some(TouchPoint::new(120.0, 90.0)));

        assert_eq!(command, GalleryCommand::Navigate(Direction::Next));
        assert_eq!(viewer.active_index(), Some(1));
        assert!(viewer.is_open());
    }

    #[test]
    fn vertical_swipe_closes_without_navigating() {
        let set = results(3);
        let mut viewer = open_at(&set, 1);
        viewer.touch_start(TouchPoint::new(100.0, 200.0));
        let command = viewer.touch_end(&set, Some(TouchPoint::new(90.0, 120.0)));

        assert_eq!(command, GalleryCommand::Close);
        assert!(!viewer.is_open());
    }

    #[test]
    fn touch_move_suppresses_scroll_only_during_gesture() {
        let set = results(2);
        let mut viewer = open_at(&set, 0);
        assert!(!viewer.touch_move(TouchPoint::new(1.0, 1.0)));
        viewer.touch_start(TouchPoint::new(0.0, 0.0));
        assert!(viewer.touch_move(TouchPoint::new(5.0, 5.0)));
    }

    #[test]
    fn reanchor_follows_record_after_sort() {
        let mut set = ResultSet::new(vec![
            MatchRecord::new("b.jpg", 0.9, "/r/b", "/o/b"),
            MatchRecord::new("a.jpg", 0.1, "/r/a", "/o/a"),
        ]);
        let mut viewer = open_at(&set, 0);
        let shown = viewer.active_record(&set).cloned().expect("record");

        set.sort(SortCriterion::ByAccuracy);
        viewer.reanchor(&set, &shown);
        assert_eq!(viewer.active_index(), Some(1));
        assert_eq!(viewer.active_record(&set), Some(&shown));
    }
}
