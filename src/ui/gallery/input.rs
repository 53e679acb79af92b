// SPDX-License-Identifier: MPL-2.0
//! Toolkit-neutral input vocabulary for the gallery viewer.
//!
//! Platform adapters translate their native key, click and touch events into
//! these types; the viewer turns them into [`GalleryCommand`]s.

use super::gesture::Swipe;

/// Navigation direction through the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0.
    Previous,
    /// Toward the last index.
    Next,
}

impl Direction {
    /// Maps a raw `-1` / `+1` step; any other value is rejected.
    #[must_use]
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(Self::Previous),
            1 => Some(Self::Next),
            _ => None,
        }
    }

    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Parses a DOM-style key name (`"ArrowLeft"`, `"Escape"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// What a click inside the open viewer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The enlarged image itself.
    Image,
    /// The backdrop around the image.
    Background,
    CloseButton,
    PreviousButton,
    NextButton,
    /// The download link; handled by the platform, no viewer change.
    DownloadLink,
}

/// Command produced by input translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    None,
    Navigate(Direction),
    Close,
}

/// Maps a key press to a command.
#[must_use]
pub fn map_key(key: Key) -> GalleryCommand {
    match key {
        Key::ArrowLeft => GalleryCommand::Navigate(Direction::Previous),
        Key::ArrowRight => GalleryCommand::Navigate(Direction::Next),
        Key::Escape => GalleryCommand::Close,
        Key::Other => GalleryCommand::None,
    }
}

/// Maps a click to a command. Clicks on the image itself do nothing.
#[must_use]
pub fn map_pointer(target: PointerTarget) -> GalleryCommand {
    match target {
        PointerTarget::Background | PointerTarget::CloseButton => GalleryCommand::Close,
        PointerTarget::PreviousButton => GalleryCommand::Navigate(Direction::Previous),
        PointerTarget::NextButton => GalleryCommand::Navigate(Direction::Next),
        PointerTarget::Image | PointerTarget::DownloadLink => GalleryCommand::None,
    }
}

/// Maps a classified swipe to a command. Swiping left advances.
#[must_use]
pub fn map_swipe(swipe: Swipe) -> GalleryCommand {
    match swipe {
        Swipe::Left => GalleryCommand::Navigate(Direction::Next),
        Swipe::Right => GalleryCommand::Navigate(Direction::Previous),
        Swipe::Vertical => GalleryCommand::Close,
    }
}
