//! Hero section: headline, calls to action, and quick stats

use dioxus::prelude::*;

use crate::scroll;

/// Headline stat cards floated beside the hero copy.
struct HeroStat {
    metric: &'static str,
    caption: &'static str,
}

const HERO_STATS: [HeroStat; 3] = [
    HeroStat { metric: "500+", caption: "Infrastructure Deployments" },
    HeroStat { metric: "99.9%", caption: "System Uptime" },
    HeroStat { metric: "8+", caption: "Years Experience" },
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "fa-brands fa-github"),
    ("LinkedIn", "fa-brands fa-linkedin-in"),
    ("Email", "fa-solid fa-envelope"),
];

/// Stat cards alternate a left inset on the floating stack.
fn stat_card_class(position: usize) -> &'static str {
    if position % 2 == 1 {
        "glass-card p-6 rounded-lg ml-8 transform hover:scale-105 transition-transform"
    } else {
        "glass-card p-6 rounded-lg transform hover:scale-105 transition-transform"
    }
}

/// Landing section. Slides in once shortly after mount instead of going
/// through a viewport tracker, since it is already on screen.
#[component]
pub fn Hero() -> Element {
    let mut entered = use_signal(|| false);

    // Flip after the first paint so the CSS transition has a start state.
    use_effect(move || entered.set(true));

    let copy_class = if entered() {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    let stack_class = if entered() {
        "opacity-100 scale-100"
    } else {
        "opacity-0 scale-95"
    };

    rsx! {
        section {
            id: "home",
            class: "relative min-h-screen flex items-center overflow-hidden pt-20 md:pt-0",

            div { class: "absolute inset-0 hero-backdrop z-0",
                div { class: "absolute inset-0 bg-gradient-to-r from-background via-background/80 to-transparent" }
            }

            div { class: "container relative z-10 grid md:grid-cols-2 gap-12 items-center",
                div { class: "space-y-6 transition-all duration-1000 {copy_class}",
                    div { class: "inline-flex items-center gap-2 px-4 py-2 rounded-full bg-card/50 border border-border backdrop-blur-sm w-fit",
                        div { class: "w-2 h-2 rounded-full bg-accent animate-pulse" }
                        span { class: "text-sm font-medium text-accent",
                            "Available for Opportunities"
                        }
                    }

                    div { class: "space-y-2",
                        h1 { class: "text-5xl md:text-6xl font-bold leading-tight",
                            "Cloud DevOps"
                            br {}
                            span { class: "gradient-text", "Engineer" }
                        }
                        p { class: "text-lg text-muted-foreground max-w-lg",
                            "Architecting scalable infrastructure, automating deployments, and optimizing cloud ecosystems. Specializing in Kubernetes, Docker, CI/CD pipelines, and infrastructure-as-code."
                        }
                    }

                    div { class: "flex flex-col sm:flex-row gap-4 pt-4",
                        button {
                            class: "glass-card px-6 py-3 rounded-lg font-semibold flex items-center justify-center gap-2 bg-accent/20 border-accent hover:bg-accent/30 transition-all",
                            onclick: move |_| scroll::to_section("projects"),
                            "View Projects"
                            i { class: "fa-solid fa-arrow-right" }
                        }
                        button {
                            class: "glass-card px-6 py-3 rounded-lg font-semibold hover:bg-card/80 transition-all",
                            onclick: move |_| scroll::to_section("contact"),
                            "Get in Touch"
                        }
                    }

                    div { class: "flex gap-4 pt-6",
                        for (label, icon) in SOCIAL_LINKS {
                            a {
                                href: "#",
                                class: "glass-card p-3 rounded-lg hover:bg-card/80 transition-all glow-effect",
                                aria_label: label,
                                i { class: "{icon} text-lg" }
                            }
                        }
                    }
                }

                div { class: "hidden md:block transition-all duration-1000 delay-300 {stack_class}",
                    div { class: "space-y-4",
                        for (position, stat) in HERO_STATS.iter().enumerate() {
                            div { class: stat_card_class(position),
                                div { class: "text-3xl font-bold gradient-text", "{stat.metric}" }
                                p { class: "text-sm text-muted-foreground", "{stat.caption}" }
                            }
                        }
                    }
                }
            }

            div { class: "absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce",
                div { class: "w-6 h-10 border-2 border-accent rounded-full flex items-start justify-center p-2",
                    div { class: "w-1 h-2 bg-accent rounded-full animate-pulse" }
                }
            }
        }
    }
}
