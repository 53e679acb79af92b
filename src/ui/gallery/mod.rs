// SPDX-License-Identifier: MPL-2.0
//! Result gallery viewer.
//!
//! - [`viewer`] - `GalleryViewer` state machine with clamped navigation
//! - [`gesture`] - Swipe tracking and classification
//! - [`input`] - Keyboard, pointer and swipe translation into commands

pub mod gesture;
pub mod input;
pub mod viewer;

pub use gesture::{Swipe, SwipeThreshold, SwipeTracker, TouchPoint};
pub use input::{Direction, GalleryCommand, Key, PointerTarget};
pub use viewer::{GalleryFrame, GalleryState, GalleryViewer};
