// SPDX-License-Identifier: MPL-2.0
//! Match record value object.

/// One backend-returned candidate image.
///
/// `distance` is a dissimilarity score in `[0, 1]`; lower means more similar.
/// Records are immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    filename: String,
    distance: f64,
    resized_uri: String,
    original_uri: String,
}

impl MatchRecord {
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        distance: f64,
        resized_uri: impl Into<String>,
        original_uri: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            distance,
            resized_uri: resized_uri.into(),
            original_uri: original_uri.into(),
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// URI of the display-sized image.
    #[must_use]
    pub fn resized_uri(&self) -> &str {
        &self.resized_uri
    }

    /// URI of the original-resolution image (download target).
    #[must_use]
    pub fn original_uri(&self) -> &str {
        &self.original_uri
    }

    /// Similarity shown to the user: `round((1 - distance) * 100)`, kept within 0–100.
    // Clamped to 0..=100 before the cast, so it cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn similarity_percent(&self) -> u8 {
        ((1.0 - self.distance) * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Returns whether `other` refers to the same backend image.
    #[must_use]
    pub fn same_record(&self, other: &MatchRecord) -> bool {
        self.original_uri == other.original_uri && self.filename == other.filename
    }
}
