//! Reveal trackers: the latch set and the two watcher flavors

use std::collections::HashSet;

use super::viewport::IntersectionSink;

/// One intersection report for a watched target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionRecord {
    /// Stable index the target was registered under.
    pub index: usize,
    /// Whether the target currently crosses the visibility threshold.
    pub is_intersecting: bool,
}

impl IntersectionRecord {
    pub fn entering(index: usize) -> Self {
        Self { index, is_intersecting: true }
    }

    pub fn leaving(index: usize) -> Self {
        Self { index, is_intersecting: false }
    }
}

/// Indices that have intersected the viewport at least once.
///
/// The set only grows. Revealing is a one-way latch, so scrolling an item
/// back out of view never hides it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    seen: HashSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch `index` as revealed. Returns true only the first time.
    pub fn mark(&mut self, index: usize) -> bool {
        self.seen.insert(index)
    }

    /// Whether `index` has ever been revealed.
    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Per-section tracker: folds intersection batches into a [`RevealSet`].
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: RevealSet,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one batch of reports into the set.
    ///
    /// Only entering reports latch anything; leaving reports are ignored.
    /// Returns true when at least one index was newly revealed.
    pub fn ingest(&mut self, batch: &[IntersectionRecord]) -> bool {
        let mut changed = false;
        for record in batch {
            if record.is_intersecting {
                changed |= self.revealed.mark(record.index);
            }
        }
        changed
    }

    pub fn revealed(&self) -> &RevealSet {
        &self.revealed
    }

    /// Package the tracker as an intersection sink that hands the updated
    /// set to `on_change` whenever a batch revealed something new.
    pub fn into_sink(self, mut on_change: impl FnMut(&RevealSet) + 'static) -> IntersectionSink {
        let mut tracker = self;
        Box::new(move |batch| {
            if tracker.ingest(batch) {
                on_change(tracker.revealed());
            }
            Vec::new()
        })
    }
}

/// Page-level variant: every target fires exactly once and is then let go.
#[derive(Debug, Default)]
pub struct OneShotTracker {
    fired: RevealSet,
}

impl OneShotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices firing on this batch.
    ///
    /// Each index is returned at most once over the tracker's lifetime;
    /// callers drop the registration of every returned target.
    pub fn ingest(&mut self, batch: &[IntersectionRecord]) -> Vec<usize> {
        batch
            .iter()
            .filter(|record| record.is_intersecting)
            .filter(|record| self.fired.mark(record.index))
            .map(|record| record.index)
            .collect()
    }

    /// Package the tracker as a sink whose release list is its fire list.
    pub fn into_sink(self) -> IntersectionSink {
        let mut tracker = self;
        Box::new(move |batch| tracker.ingest(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_set_starts_empty() {
        let tracker = RevealTracker::new();
        assert!(tracker.revealed().is_empty());
        assert_eq!(tracker.revealed().len(), 0);
    }

    #[test]
    fn entering_report_latches_index() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.ingest(&[IntersectionRecord::entering(2)]));
        assert!(tracker.revealed().contains(2));
        assert_eq!(tracker.revealed().len(), 1);
    }

    #[test]
    fn retrigger_is_a_no_op() {
        let mut tracker = RevealTracker::new();
        tracker.ingest(&[IntersectionRecord::entering(0)]);
        assert!(!tracker.ingest(&[IntersectionRecord::entering(0)]));
        assert_eq!(tracker.revealed().len(), 1);
    }

    #[test]
    fn leaving_never_unreveals() {
        let mut tracker = RevealTracker::new();
        tracker.ingest(&[IntersectionRecord::entering(1)]);
        assert!(!tracker.ingest(&[IntersectionRecord::leaving(1)]));
        assert!(tracker.revealed().contains(1));
    }

    #[test]
    fn untriggered_index_stays_absent() {
        let mut tracker = RevealTracker::new();
        tracker.ingest(&[IntersectionRecord::entering(0), IntersectionRecord::entering(2)]);
        assert!(!tracker.revealed().contains(1));
    }

    #[test]
    fn scroll_sequence_accumulates_without_removal() {
        // Three cards: the middle one enters first, the outer two follow,
        // then the middle one scrolls back out of view.
        let mut tracker = RevealTracker::new();

        assert!(tracker.ingest(&[IntersectionRecord::entering(1)]));
        assert_eq!(tracker.revealed().len(), 1);

        assert!(tracker.ingest(&[
            IntersectionRecord::entering(0),
            IntersectionRecord::entering(2),
        ]));
        assert_eq!(tracker.revealed().len(), 3);

        assert!(!tracker.ingest(&[IntersectionRecord::leaving(1)]));
        for index in 0..3 {
            assert!(tracker.revealed().contains(index));
        }
    }

    #[test]
    fn mixed_batch_only_latches_entering_indices() {
        let mut tracker = RevealTracker::new();
        tracker.ingest(&[
            IntersectionRecord::entering(0),
            IntersectionRecord::leaving(1),
        ]);
        assert!(tracker.revealed().contains(0));
        assert!(!tracker.revealed().contains(1));
    }

    #[test]
    fn one_shot_fires_each_index_once() {
        let mut tracker = OneShotTracker::new();
        assert_eq!(tracker.ingest(&[IntersectionRecord::entering(4)]), vec![4]);
        assert!(tracker.ingest(&[IntersectionRecord::entering(4)]).is_empty());
    }

    #[test]
    fn one_shot_ignores_leaving_reports() {
        let mut tracker = OneShotTracker::new();
        assert!(tracker.ingest(&[IntersectionRecord::leaving(0)]).is_empty());
    }

    #[test]
    fn one_shot_reports_every_new_index_in_a_batch() {
        let mut tracker = OneShotTracker::new();
        let fired = tracker.ingest(&[
            IntersectionRecord::entering(0),
            IntersectionRecord::leaving(1),
            IntersectionRecord::entering(2),
        ]);
        assert_eq!(fired, vec![0, 2]);
    }
}
