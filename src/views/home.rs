//! Home view - the single scrolling portfolio page

use dioxus::prelude::*;

use crate::components::{Certifications, Contact, Experience, Hero, Projects, Skills};
use crate::reveal::use_page_reveal;

/// The whole page: hero plus the five content sections.
///
/// Also arms the one-shot page-level watcher that fades in the section
/// headers the first time each one scrolls into view.
#[component]
pub fn Home() -> Element {
    use_page_reveal();

    rsx! {
        main { class: "relative",
            Hero {}
            Skills {}
            Projects {}
            Experience {}
            Certifications {}
            Contact {}
        }
    }
}
