//! Experience timeline section

use dioxus::prelude::*;

use super::entrance_class;
use crate::reveal::use_scroll_reveal;

/// One role on the timeline.
struct ExperienceEntry {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
}

const EXPERIENCES: [ExperienceEntry; 4] = [
    ExperienceEntry {
        title: "Senior DevOps Engineer",
        company: "Tech Innovation Corp",
        period: "2022 - Present",
        description: "Leading cloud infrastructure and automation initiatives for enterprise clients",
        achievements: &[
            "Architected multi-cloud Kubernetes platform serving 10M+ users",
            "Reduced infrastructure costs by 40% through optimization",
            "Led team of 5 engineers in DevOps transformation",
        ],
    },
    ExperienceEntry {
        title: "DevOps Engineer",
        company: "Cloud Solutions Inc",
        period: "2020 - 2022",
        description: "Implemented CI/CD pipelines and infrastructure automation",
        achievements: &[
            "Built automated deployment pipelines for 30+ applications",
            "Achieved 99.9% uptime across production systems",
            "Migrated legacy infrastructure to AWS cloud",
        ],
    },
    ExperienceEntry {
        title: "Infrastructure Engineer",
        company: "Enterprise Systems Ltd",
        period: "2018 - 2020",
        description: "Managed on-premise and cloud infrastructure",
        achievements: &[
            "Maintained 200+ server infrastructure",
            "Implemented monitoring and alerting systems",
            "Reduced incident response time by 50%",
        ],
    },
    ExperienceEntry {
        title: "Systems Administrator",
        company: "Digital Services Group",
        period: "2016 - 2018",
        description: "Administered Linux systems and network infrastructure",
        achievements: &[
            "Managed Linux server fleet and network security",
            "Automated routine tasks with Bash and Python",
            "Supported 500+ internal users",
        ],
    },
];

/// Entries alternate sides of the center line on desktop.
fn entry_card_class(index: usize) -> &'static str {
    if index % 2 == 1 {
        "glass-card p-6 rounded-lg md:order-2"
    } else {
        "glass-card p-6 rounded-lg"
    }
}

/// Career timeline with per-entry reveal tracking.
#[component]
pub fn Experience() -> Element {
    let revealed = use_scroll_reveal("experience");

    rsx! {
        section {
            id: "experience",
            class: "py-20 md:py-32 relative overflow-hidden",

            div { class: "container relative z-10",
                div { class: "scroll-reveal max-w-2xl mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold mb-4", "Experience" }
                    p { class: "text-lg text-muted-foreground",
                        "Eight years of building and operating production infrastructure"
                    }
                }

                div { class: "relative",
                    div { class: "hidden md:block absolute left-1/2 transform -translate-x-1/2 w-1 h-full bg-gradient-to-b from-accent via-accent to-transparent opacity-30" }

                    div { class: "space-y-8 md:space-y-12",
                        for (index, experience) in EXPERIENCES.iter().enumerate() {
                            div {
                                "data-reveal-index": "{index}",
                                class: "transition-all duration-700 {entrance_class(revealed.read().contains(index))}",

                                div { class: "grid md:grid-cols-2 gap-8 items-center",
                                    div { class: entry_card_class(index),
                                        div { class: "flex items-start gap-3 mb-4",
                                            div { class: "p-2 rounded-lg bg-accent/20 flex-shrink-0",
                                                i { class: "fa-solid fa-briefcase text-accent" }
                                            }
                                            div {
                                                h3 { class: "text-xl font-bold", "{experience.title}" }
                                                p { class: "text-accent text-sm font-medium",
                                                    "{experience.company}"
                                                }
                                            }
                                        }

                                        div { class: "flex items-center gap-2 mb-4 text-sm text-muted-foreground",
                                            i { class: "fa-regular fa-calendar" }
                                            "{experience.period}"
                                        }

                                        p { class: "text-muted-foreground mb-4",
                                            "{experience.description}"
                                        }

                                        ul { class: "space-y-2",
                                            for achievement in experience.achievements {
                                                li { class: "text-sm text-muted-foreground flex items-start gap-2",
                                                    span { class: "w-1.5 h-1.5 rounded-full bg-accent mt-2 flex-shrink-0" }
                                                    "{achievement}"
                                                }
                                            }
                                        }
                                    }

                                    div { class: "hidden md:flex justify-center",
                                        div { class: "w-4 h-4 rounded-full bg-accent border-4 border-background" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_alternate_timeline_sides() {
        assert!(!entry_card_class(0).contains("md:order-2"));
        assert!(entry_card_class(1).contains("md:order-2"));
        assert!(!entry_card_class(2).contains("md:order-2"));
    }
}
