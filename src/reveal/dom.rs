//! DOM-backed viewport watcher over `IntersectionObserver`
//!
//! Web builds watch real elements. On every other target the capability
//! reports unavailable and callers fall back to revealing nothing.

use super::viewport::{IntersectionSink, Viewport, ViewportWatch};

/// Which elements a watcher covers.
#[derive(Debug, Clone, Copy)]
enum TargetQuery {
    /// Indexed cards inside one section root.
    Section(&'static str),
    /// Every element carrying the page-level reveal marker class.
    PageReveals,
}

/// Browser viewport capability scoped to one set of targets.
#[derive(Debug, Clone, Copy)]
pub struct DomViewport {
    query: TargetQuery,
}

impl DomViewport {
    /// Watch the indexed cards inside `#section_id`.
    pub fn for_section(section_id: &'static str) -> Self {
        Self { query: TargetQuery::Section(section_id) }
    }

    /// Watch every element carrying the page-level reveal marker class.
    pub fn page_reveals() -> Self {
        Self { query: TargetQuery::PageReveals }
    }
}

#[cfg(target_arch = "wasm32")]
mod web_impl {
    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::super::tracker::IntersectionRecord;
    use super::super::{PAGE_REVEAL_CLASS, REVEALED_CLASS, REVEAL_INDEX_ATTR};
    use super::*;

    impl TargetQuery {
        /// Ordered target list with the index each element is tracked under.
        fn collect(&self, document: &web_sys::Document) -> Vec<(usize, Element)> {
            let selector = match self {
                TargetQuery::Section(section_id) => {
                    format!("#{section_id} [{REVEAL_INDEX_ATTR}]")
                }
                TargetQuery::PageReveals => format!(".{PAGE_REVEAL_CLASS}"),
            };
            let nodes = match document.query_selector_all(&selector) {
                Ok(nodes) => nodes,
                Err(_) => return Vec::new(),
            };
            let elements = (0..nodes.length())
                .filter_map(|position| nodes.item(position))
                .filter_map(|node| node.dyn_into::<Element>().ok());

            match self {
                // Indices come from the cards' own attributes so they stay
                // stable regardless of document order.
                TargetQuery::Section(_) => elements
                    .filter_map(|element| {
                        let index = element
                            .get_attribute(REVEAL_INDEX_ATTR)?
                            .parse::<usize>()
                            .ok()?;
                        Some((index, element))
                    })
                    .collect(),
                TargetQuery::PageReveals => elements.enumerate().collect(),
            }
        }

        /// Page-level targets get the reveal class applied when released.
        fn reveal_class(&self) -> Option<&'static str> {
            match self {
                TargetQuery::Section(_) => None,
                TargetQuery::PageReveals => Some(REVEALED_CLASS),
            }
        }
    }

    impl Viewport for DomViewport {
        type Watch = DomWatch;

        fn register(&self, threshold: f64, mut sink: IntersectionSink) -> Option<DomWatch> {
            let document = web_sys::window()?.document()?;
            let targets = self.query.collect(&document);
            let reveal_class = self.query.reveal_class();

            let callback_targets = targets.clone();
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let mut batch = Vec::new();
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let target = entry.target();
                        let Some(index) = callback_targets
                            .iter()
                            .find(|(_, element)| *element == target)
                            .map(|(index, _)| *index)
                        else {
                            continue;
                        };
                        batch.push(IntersectionRecord {
                            index,
                            is_intersecting: entry.is_intersecting(),
                        });
                    }

                    for released in sink(&batch) {
                        let Some((_, element)) = callback_targets
                            .iter()
                            .find(|(index, _)| *index == released)
                        else {
                            continue;
                        };
                        if let Some(class) = reveal_class {
                            let _ = element.class_list().add_1(class);
                        }
                        observer.unobserve(element);
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(error) => {
                    tracing::debug!("intersection observing unavailable: {error:?}");
                    return None;
                }
            };

            for (_, element) in &targets {
                observer.observe(element);
            }

            Some(DomWatch { observer, released: false, _callback: callback })
        }
    }

    /// Live browser watch. Disconnects on release and again on drop.
    pub struct DomWatch {
        observer: IntersectionObserver,
        released: bool,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    }

    impl ViewportWatch for DomWatch {
        fn release(&mut self) {
            if !self.released {
                self.observer.disconnect();
                self.released = true;
            }
        }
    }

    impl Drop for DomWatch {
        fn drop(&mut self) {
            self.release();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_impl::DomWatch;

#[cfg(not(target_arch = "wasm32"))]
pub struct DomWatch;

#[cfg(not(target_arch = "wasm32"))]
impl Viewport for DomViewport {
    type Watch = DomWatch;

    fn register(&self, _threshold: f64, _sink: IntersectionSink) -> Option<DomWatch> {
        tracing::debug!("intersection observing unavailable off-web ({:?})", self.query);
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ViewportWatch for DomWatch {
    fn release(&mut self) {}
}
