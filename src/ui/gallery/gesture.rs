// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state management
//!
//! Tracks a single touch sequence and classifies it as a horizontal swipe,
//! a vertical swipe, or noise once the finger lifts.

use crate::config::{DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD, MIN_SWIPE_THRESHOLD};

/// Minimum displacement for a touch movement to count as a swipe.
///
/// Clamped to 10–500 screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// A touch position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Classified outcome of a completed touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left.
    Left,
    /// Finger moved left-to-right.
    Right,
    /// Dominant vertical movement in either direction.
    Vertical,
}

/// Classifies a displacement, where `dx = start.x - end.x` and `dy = start.y - end.y`.
///
/// Horizontal wins only when strictly dominant; ties go to vertical.
#[must_use]
pub fn classify(dx: f32, dy: f32, threshold: SwipeThreshold) -> Option<Swipe> {
    let (adx, ady) = (dx.abs(), dy.abs());
    if adx > ady && adx > threshold.value() {
        Some(if dx > 0.0 { Swipe::Left } else { Swipe::Right })
    } else if ady >= adx && ady > threshold.value() {
        Some(Swipe::Vertical)
    } else {
        None
    }
}

/// Manages a single touch sequence
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    /// Position where the touch started
    start_position: Option<TouchPoint>,

    /// Most recent position reported by a move event
    last_position: Option<TouchPoint>,

    threshold: SwipeThreshold,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Starts tracking a touch sequence
    pub fn start(&mut self, position: TouchPoint) {
        self.start_position = Some(position);
        self.last_position = Some(position);
    }

    /// Records movement. Returns `true` while a gesture is active, meaning the
    /// adapter should suppress default page scrolling.
    pub fn moved(&mut self, position: TouchPoint) -> bool {
        if self.start_position.is_none() {
            return false;
        }
        self.last_position = Some(position);
        true
    }

    /// Ends the sequence and classifies it.
    ///
    /// `end` is the lift-off position; when the platform does not report one,
    /// the last move position is used.
    pub fn finish(&mut self, end: Option<TouchPoint>) -> Option<Swipe> {
        let start = self.start_position.take()?;
        let last = self.last_position.take();
        let end = end.or(last)?;
        classify(start.x - end.x, start.y - end.y, self.threshold)
    }

    /// Abandons the current sequence without classifying it.
    pub fn cancel(&mut self) {
        self.start_position = None;
        self.last_position = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_position.is_some()
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_clamps_to_range() {
        assert_eq!(SwipeThreshold::new(0.0).value(), MIN_SWIPE_THRESHOLD);
        assert_eq!(SwipeThreshold::new(9999.0).value(), MAX_SWIPE_THRESHOLD);
        assert_eq!(SwipeThreshold::default().value(), 50.0);
    }

    #[test]
    fn horizontal_swipes_classified_by_sign() {
        let t = SwipeThreshold::default();
        assert_eq!(classify(80.0, 10.0, t), Some(Swipe::Left));
        assert_eq!(classify(-80.0, 10.0, t), Some(Swipe::Right));
    }

    #[test]
    fn vertical_swipe_in_either_direction() {
        let t = SwipeThreshold::default();
        assert_eq!(classify(10.0, 80.0, t), Some(Swipe::Vertical));
        assert_eq!(classify(10.0, -80.0, t), Some(Swipe::Vertical));
    }

    #[test]
    fn below_threshold_is_ignored() {
        let t = SwipeThreshold::default();
        assert_eq!(classify(50.0, 0.0, t), None);
        assert_eq!(classify(0.0, 50.0, t), None);
        assert_eq!(classify(30.0, 30.0, t), None);
    }

    #[test]
    fn diagonal_tie_is_vertical() {
        assert_eq!(
            classify(60.0, 60.0, SwipeThreshold::default()),
            Some(Swipe::Vertical)
        );
    }

    #[test]
    fn default_tracker_is_idle() {
        let tracker = SwipeTracker::default();
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn move_without_start_does_not_suppress_scroll() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.moved(TouchPoint::new(1.0, 1.0)));
    }

    #[test]
    fn full_sequence_produces_swipe_and_resets() {
        let mut tracker = SwipeTracker::default();
        tracker.start(TouchPoint::new(200.0, 100.0));
        assert!(tracker.moved(TouchPoint::new(150.0, 98.0)));

        let swipe = tracker.finish(Some(TouchPoint::new(120.0, 90.0)));
        assert_eq!(swipe, Some(Swipe::Left));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.finish(Some(TouchPoint::new(0.0, 0.0))), None);
    }

    #[test]
    fn finish_falls_back_to_last_move() {
        let mut tracker = SwipeTracker::default();
        tracker.start(TouchPoint::new(100.0, 300.0));
        tracker.moved(TouchPoint::new(100.0, 200.0));
        assert_eq!(tracker.finish(None), Some(Swipe::Vertical));
    }

    #[test]
    fn cancel_clears_state() {
        let mut tracker = SwipeTracker::default();
        tracker.start(TouchPoint::new(0.0, 0.0));
        tracker.cancel();
        assert_eq!(tracker.finish(Some(TouchPoint::new(300.0, 0.0))), None);
    }
}
