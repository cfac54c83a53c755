//! Dioxus hooks tying reveal trackers to component lifecycles

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::dom::{DomViewport, DomWatch};
use super::tracker::{OneShotTracker, RevealSet, RevealTracker};
use super::viewport::{Viewport, ViewportWatch};
use super::REVEAL_THRESHOLD;

/// Reveal state for the indexed cards inside `#section_id`.
///
/// The watcher registers after the section has mounted and is released when
/// the owning component unmounts. When the intersection capability is
/// missing the returned set simply stays empty.
pub fn use_scroll_reveal(section_id: &'static str) -> Signal<RevealSet> {
    let mut revealed = use_signal(RevealSet::new);
    let watch = use_hook(|| Rc::new(RefCell::new(None::<DomWatch>)));

    {
        let watch = Rc::clone(&watch);
        use_effect(move || {
            let sink = RevealTracker::new().into_sink(move |set| revealed.set(set.clone()));
            let registration =
                DomViewport::for_section(section_id).register(REVEAL_THRESHOLD, sink);
            if registration.is_none() {
                tracing::debug!("scroll reveal inactive for #{section_id}");
            }
            *watch.borrow_mut() = registration;
        });
    }

    use_drop(move || {
        if let Some(mut active) = watch.borrow_mut().take() {
            active.release();
        }
    });

    revealed
}

/// One-shot page-level reveal for every marker-classed element.
///
/// Each target is revealed the first time it enters the viewport and its
/// registration is dropped on the spot; the whole watch is released on
/// unmount for targets that never appeared.
pub fn use_page_reveal() {
    let watch = use_hook(|| Rc::new(RefCell::new(None::<DomWatch>)));

    {
        let watch = Rc::clone(&watch);
        use_effect(move || {
            let sink = OneShotTracker::new().into_sink();
            *watch.borrow_mut() = DomViewport::page_reveals().register(REVEAL_THRESHOLD, sink);
        });
    }

    use_drop(move || {
        if let Some(mut active) = watch.borrow_mut().take() {
            active.release();
        }
    });
}
