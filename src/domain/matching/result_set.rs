// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of matches for one submission.

use super::record::MatchRecord;

/// Criterion for re-ordering a [`ResultSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    /// Ascending distance, most similar first.
    #[default]
    ByAccuracy,
    /// Ascending filename, compared by code point (case-aware).
    ByFilename,
}

/// Ordered sequence of [`MatchRecord`]s.
///
/// Replaced wholesale on every successful submission. Sorting is stable and
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<MatchRecord>,
    sorted_by: Option<SortCriterion>,
}

impl ResultSet {
    /// Creates a result set in backend order.
    #[must_use]
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self {
            records,
            sorted_by: None,
        }
    }

    /// Re-orders the records in place. Ties keep their relative order.
    pub fn sort(&mut self, criterion: SortCriterion) {
        match criterion {
            SortCriterion::ByAccuracy => self
                .records
                .sort_by(|a, b| a.distance().total_cmp(&b.distance())),
            SortCriterion::ByFilename => self
                .records
                .sort_by(|a, b| a.filename().cmp(b.filename())),
        }
        self.sorted_by = Some(criterion);
    }

    /// Returns the last criterion applied, if any.
    #[must_use]
    pub fn sorted_by(&self) -> Option<SortCriterion> {
        self.sorted_by
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MatchRecord> {
        self.records.get(index)
    }

    /// Finds the current position of a record by identity.
    #[must_use]
    pub fn position_of(&self, record: &MatchRecord) -> Option<usize> {
        self.records.iter().position(|r| r.same_record(record))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the last record, `None` when empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.records.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, distance: f64) -> MatchRecord {
        MatchRecord::new(name, distance, format!("/r/{name}"), format!("/o/{name}"))
    }

    fn names(set: &ResultSet) -> Vec<&str> {
        set.iter().map(MatchRecord::filename).collect()
    }

    #[test]
    fn sort_by_accuracy_orders_ascending_distance() {
        let mut set = ResultSet::new(vec![
            record("far.jpg", 0.8),
            record("near.jpg", 0.1),
            record("mid.jpg", 0.5),
        ]);

        set.sort(SortCriterion::ByAccuracy);
        assert_eq!(names(&set), vec!["near.jpg", "mid.jpg", "far.jpg"]);

        set.sort(SortCriterion::ByAccuracy);
        assert_eq!(names(&set), vec!["near.jpg", "mid.jpg", "far.jpg"]);
        assert_eq!(set.sorted_by(), Some(SortCriterion::ByAccuracy));
    }

    #[test]
    fn sort_by_accuracy_is_stable_on_ties() {
        let mut set = ResultSet::new(vec![
            record("b.jpg", 0.3),
            record("a.jpg", 0.3),
            record("c.jpg", 0.1),
        ]);
        set.sort(SortCriterion::ByAccuracy);
        assert_eq!(names(&set), vec!["c.jpg", "b.jpg", "a.jpg"]);
    }

    #[test]
    fn sort_by_filename_is_case_aware() {
        let mut set = ResultSet::new(vec![
            record("beta.jpg", 0.1),
            record("Alpha.jpg", 0.2),
            record("alpha.jpg", 0.3),
        ]);
        set.sort(SortCriterion::ByFilename);
        assert_eq!(names(&set), vec!["Alpha.jpg", "alpha.jpg", "beta.jpg"]);
    }

    #[test]
    fn position_of_tracks_record_after_sort() {
        let mut set = ResultSet::new(vec![record("z.jpg", 0.1), record("a.jpg", 0.9)]);
        let tracked = set.get(0).cloned().expect("record at 0");

        set.sort(SortCriterion::ByFilename);
        assert_eq!(set.position_of(&tracked), Some(1));
    }

    #[test]
    fn empty_set_has_no_last_index() {
        let set = ResultSet::default();
        assert!(set.is_empty());
        assert_eq!(set.last_index(), None);
        assert_eq!(ResultSet::new(vec![record("a", 0.0)]).last_index(), Some(0));
    }
}
