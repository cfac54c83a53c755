//! Scroll-reveal tracking for the page sections
//!
//! Every content section watches its cards and latches each one "revealed"
//! the first time it enters the viewport; a one-shot page-level variant
//! covers elements carrying the generic reveal marker class. The viewport
//! capability sits behind a small register/release seam so unit tests can
//! drive it deterministically.

mod dom;
mod hooks;
mod tracker;
mod viewport;

pub use dom::{DomViewport, DomWatch};
pub use hooks::{use_page_reveal, use_scroll_reveal};
pub use tracker::{IntersectionRecord, OneShotTracker, RevealSet, RevealTracker};
pub use viewport::{IntersectionSink, Viewport, ViewportWatch};

/// Fraction of a card that must be visible before it counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Attribute carrying a card's stable index within its section.
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Marker class for elements revealed once by the page-level watcher.
pub const PAGE_REVEAL_CLASS: &str = "scroll-reveal";

/// Class applied to a page-level target when it first reveals.
pub const REVEALED_CLASS: &str = "animate-in";
