//! The viewport-intersection capability behind a narrow seam

use super::tracker::IntersectionRecord;

/// Receives intersection batches for a watched target set.
///
/// The return value lists the indices whose registrations should be
/// dropped after this batch; persistent watchers return an empty list.
pub type IntersectionSink = Box<dyn FnMut(&[IntersectionRecord]) -> Vec<usize>>;

/// Source of viewport intersection reports for an ordered set of targets.
///
/// [`DomViewport`](super::DomViewport) implements this over the browser's
/// `IntersectionObserver`; tests substitute a fake that delivers batches
/// synchronously.
pub trait Viewport {
    type Watch: ViewportWatch;

    /// Start watching. Batches reach `sink` until the watch is released.
    ///
    /// `None` means the capability is unavailable on this platform; callers
    /// degrade to never revealing anything.
    fn register(&self, threshold: f64, sink: IntersectionSink) -> Option<Self::Watch>;
}

/// Handle to an active registration.
pub trait ViewportWatch {
    /// Drop every remaining registration. No sink call happens afterwards.
    /// Idempotent, and dropping a watch must release it too.
    fn release(&mut self);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::super::tracker::{IntersectionRecord, OneShotTracker, RevealTracker};
    use super::*;

    /// Deterministic viewport: the test body plays the platform, delivering
    /// batches synchronously and honoring per-target and full releases.
    #[derive(Default)]
    struct FakeViewport {
        state: Rc<RefCell<FakeState>>,
    }

    #[derive(Default)]
    struct FakeState {
        sink: Option<IntersectionSink>,
        dropped: HashSet<usize>,
        released: bool,
    }

    struct FakeWatch {
        state: Rc<RefCell<FakeState>>,
    }

    impl FakeViewport {
        fn new() -> Self {
            Self::default()
        }

        /// Deliver a batch the way the platform would, skipping targets
        /// whose registrations were already dropped.
        fn fire(&self, batch: &[IntersectionRecord]) {
            let (sink, filtered) = {
                let mut state = self.state.borrow_mut();
                if state.released {
                    return;
                }
                let filtered: Vec<_> = batch
                    .iter()
                    .copied()
                    .filter(|record| !state.dropped.contains(&record.index))
                    .collect();
                (state.sink.take(), filtered)
            };
            let Some(mut sink) = sink else { return };

            let releases = sink(&filtered);

            let mut state = self.state.borrow_mut();
            state.dropped.extend(releases);
            if !state.released {
                state.sink = Some(sink);
            }
        }

        fn dropped(&self) -> HashSet<usize> {
            self.state.borrow().dropped.clone()
        }
    }

    impl Viewport for FakeViewport {
        type Watch = FakeWatch;

        fn register(&self, _threshold: f64, sink: IntersectionSink) -> Option<FakeWatch> {
            let mut state = self.state.borrow_mut();
            state.sink = Some(sink);
            state.released = false;
            Some(FakeWatch { state: Rc::clone(&self.state) })
        }
    }

    impl ViewportWatch for FakeWatch {
        fn release(&mut self) {
            let mut state = self.state.borrow_mut();
            state.released = true;
            state.sink = None;
        }
    }

    #[test]
    fn release_stops_delivery() {
        let calls = Rc::new(RefCell::new(0));
        let viewport = FakeViewport::new();
        let sink: IntersectionSink = {
            let calls = Rc::clone(&calls);
            Box::new(move |_| {
                *calls.borrow_mut() += 1;
                Vec::new()
            })
        };
        let mut watch = viewport.register(0.1, sink).unwrap();

        viewport.fire(&[IntersectionRecord::entering(0)]);
        assert_eq!(*calls.borrow(), 1);

        watch.release();
        viewport.fire(&[IntersectionRecord::entering(1)]);
        viewport.fire(&[IntersectionRecord::entering(2)]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn release_is_idempotent() {
        let viewport = FakeViewport::new();
        let sink = RevealTracker::new().into_sink(|_| {});
        let mut watch = viewport.register(0.1, sink).unwrap();
        watch.release();
        watch.release();
        viewport.fire(&[IntersectionRecord::entering(0)]);
        assert!(viewport.dropped().is_empty());
    }

    #[test]
    fn section_sink_reports_only_changes() {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let viewport = FakeViewport::new();
        let sink = RevealTracker::new().into_sink({
            let snapshots = Rc::clone(&snapshots);
            move |set| snapshots.borrow_mut().push(set.len())
        });
        let _watch = viewport.register(0.1, sink).unwrap();

        viewport.fire(&[IntersectionRecord::entering(1)]);
        viewport.fire(&[IntersectionRecord::entering(1)]);
        viewport.fire(&[
            IntersectionRecord::entering(0),
            IntersectionRecord::entering(2),
        ]);
        viewport.fire(&[IntersectionRecord::leaving(1)]);

        // Two batches changed the set; the retrigger and the exit did not.
        assert_eq!(*snapshots.borrow(), vec![1, 3]);
    }

    #[test]
    fn section_sink_never_requests_releases() {
        let viewport = FakeViewport::new();
        let sink = RevealTracker::new().into_sink(|_| {});
        let _watch = viewport.register(0.1, sink).unwrap();

        viewport.fire(&[IntersectionRecord::entering(0)]);
        viewport.fire(&[IntersectionRecord::entering(1)]);
        assert!(viewport.dropped().is_empty());
    }

    #[test]
    fn one_shot_sink_releases_fired_targets() {
        let viewport = FakeViewport::new();
        let sink = OneShotTracker::new().into_sink();
        let _watch = viewport.register(0.1, sink).unwrap();

        viewport.fire(&[IntersectionRecord::entering(3)]);
        assert!(viewport.dropped().contains(&3));

        // A dropped target never reaches the sink again, and other targets
        // keep working.
        viewport.fire(&[IntersectionRecord::entering(3)]);
        assert_eq!(viewport.dropped().len(), 1);

        viewport.fire(&[IntersectionRecord::entering(5)]);
        assert!(viewport.dropped().contains(&5));
        assert_eq!(viewport.dropped().len(), 2);
    }
}
