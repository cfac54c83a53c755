//! Sticky navigation bar with section links and the theme toggle

use dioxus::prelude::*;
use tracing::info;

use crate::scroll;
use crate::theme::Theme;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Section anchors exposed in the nav. Certifications stays reachable by
/// scrolling; the bar lists these five.
const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Experience", "experience"),
    ("Contact", "contact"),
];

/// Navigation bar over the page content.
///
/// The theme arrives as an explicit signal from the app root; the toggle
/// button writes the flipped value back through the same signal.
#[component]
pub fn Navbar(mut theme: Signal<Theme>) -> Element {
    let mut menu_open = use_signal(|| false);

    let toggle_icon = match theme() {
        Theme::Dark => "fa-solid fa-sun text-yellow-400",
        Theme::Light => "fa-solid fa-moon text-slate-600",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { class: "glass-nav fixed top-0 left-0 right-0 z-50",
            div { class: "container flex items-center justify-between h-16 md:h-20",
                button {
                    class: "flex items-center gap-2",
                    onclick: move |_| scroll::to_section("home"),
                    div { class: "w-8 h-8 rounded-lg bg-gradient-to-br from-cyan-400 to-purple-500 flex items-center justify-center",
                        span { class: "text-white font-bold text-sm", "D" }
                    }
                    span { class: "hidden sm:inline font-bold text-lg gradient-text", "DevOps" }
                }

                div { class: "hidden md:flex items-center gap-8",
                    for (label, section_id) in NAV_LINKS {
                        button {
                            class: "link-underline text-sm font-medium hover:text-accent transition-colors",
                            onclick: move |_| scroll::to_section(section_id),
                            "{label}"
                        }
                    }
                }

                div { class: "flex items-center gap-4",
                    button {
                        class: "p-2 rounded-lg hover:bg-card/50 transition-colors glow-effect",
                        aria_label: "Toggle theme",
                        onclick: move |_| {
                            let next = theme().toggled();
                            info!("theme switched to {}", next.label());
                            theme.set(next);
                        },
                        i { class: "{toggle_icon} text-lg" }
                    }

                    button {
                        class: "md:hidden p-2 rounded-lg hover:bg-card/50 transition-colors",
                        aria_label: "Toggle menu",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        i {
                            class: if menu_open() { "fa-solid fa-xmark text-lg" } else { "fa-solid fa-bars text-lg" }
                        }
                    }
                }
            }

            if menu_open() {
                div { class: "md:hidden border-t border-border bg-background/95 backdrop-blur-md",
                    div { class: "container py-4 space-y-3",
                        for (label, section_id) in NAV_LINKS {
                            button {
                                class: "block w-full text-left px-4 py-2 rounded-lg hover:bg-card/50 transition-colors text-sm font-medium",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    scroll::to_section(section_id);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
