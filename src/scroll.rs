//! Smooth scrolling between page sections
//!
//! Best effort: a missing section or a non-web target is silently ignored.

#[cfg(target_arch = "wasm32")]
pub fn to_section(section_id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(section) = document.get_element_by_id(section_id) else {
        tracing::debug!("no #{section_id} section to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn to_section(_section_id: &str) {}
