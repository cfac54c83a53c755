//! Skills section: bento grid plus the core technology wall

use dioxus::prelude::*;

use super::entrance_class;
use crate::reveal::use_scroll_reveal;

/// One bento-grid card. `wide` cards span two columns on desktop.
struct SkillCard {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    wide: bool,
}

const SKILLS: [SkillCard; 8] = [
    SkillCard {
        title: "Kubernetes",
        description: "Container orchestration, cluster management, and advanced networking",
        icon: "fa-solid fa-cloud",
        wide: true,
    },
    SkillCard {
        title: "Docker",
        description: "Containerization, image optimization, and registry management",
        icon: "fa-solid fa-code",
        wide: false,
    },
    SkillCard {
        title: "CI/CD Pipelines",
        description: "Jenkins, GitLab CI, GitHub Actions automation",
        icon: "fa-solid fa-code-branch",
        wide: false,
    },
    SkillCard {
        title: "Infrastructure as Code",
        description: "Terraform, CloudFormation, Ansible provisioning",
        icon: "fa-solid fa-bolt",
        wide: false,
    },
    SkillCard {
        title: "Cloud Platforms",
        description: "AWS, Azure, Google Cloud expertise",
        icon: "fa-solid fa-cloud",
        wide: false,
    },
    SkillCard {
        title: "Security & Compliance",
        description: "RBAC, secrets management, security scanning",
        icon: "fa-solid fa-lock",
        wide: true,
    },
    SkillCard {
        title: "Databases",
        description: "PostgreSQL, MongoDB, Redis optimization",
        icon: "fa-solid fa-database",
        wide: false,
    },
    SkillCard {
        title: "Monitoring & Logging",
        description: "Prometheus, ELK Stack, Datadog integration",
        icon: "fa-solid fa-bolt",
        wide: false,
    },
];

const CORE_TECHNOLOGIES: [&str; 12] = [
    "Kubernetes",
    "Docker",
    "Terraform",
    "AWS",
    "Jenkins",
    "GitLab CI",
    "Prometheus",
    "ELK Stack",
    "Ansible",
    "CloudFormation",
    "GitHub Actions",
    "Datadog",
];

fn card_class(skill: &SkillCard, revealed: bool) -> String {
    let span = if skill.wide { " md:col-span-2" } else { "" };
    format!(
        "glass-card p-6 rounded-lg transition-all duration-700 group{span} {}",
        entrance_class(revealed)
    )
}

fn float_delay(position: usize) -> String {
    format!("animation-delay: {}ms", position * 100)
}

/// Technical stack section with per-card reveal tracking.
#[component]
pub fn Skills() -> Element {
    let revealed = use_scroll_reveal("skills");

    rsx! {
        section {
            id: "skills",
            class: "py-20 md:py-32 relative overflow-hidden",

            div { class: "absolute inset-0 section-pattern opacity-5 z-0" }

            div { class: "container relative z-10",
                div { class: "scroll-reveal max-w-2xl mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold mb-4", "Technical Stack" }
                    p { class: "text-lg text-muted-foreground",
                        "Expertise across modern cloud infrastructure, containerization, and automation technologies"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    for (index, skill) in SKILLS.iter().enumerate() {
                        div {
                            "data-reveal-index": "{index}",
                            class: card_class(skill, revealed.read().contains(index)),
                            div { class: "p-3 rounded-lg bg-accent/20 w-fit mb-4 group-hover:bg-accent/30 transition-colors",
                                i { class: "{skill.icon} text-accent text-xl" }
                            }
                            h3 { class: "text-xl font-bold mb-2", "{skill.title}" }
                            p { class: "text-sm text-muted-foreground leading-relaxed",
                                "{skill.description}"
                            }
                        }
                    }
                }

                div { class: "mt-16 pt-16 border-t border-border",
                    h3 { class: "text-2xl font-bold mb-8", "Core Technologies" }
                    div { class: "grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4",
                        for (position, technology) in CORE_TECHNOLOGIES.iter().enumerate() {
                            div {
                                class: "glass-card px-4 py-3 rounded-lg text-center text-sm font-medium hover:bg-card/80 transition-all float-badge",
                                style: float_delay(position),
                                "{technology}"
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
    fn wide_cards_span_two_columns() {
        let wide = &SKILLS[0];
        let narrow = &SKILLS[1];
        assert!(card_class(wide, false).contains("md:col-span-2"));
        assert!(!card_class(narrow, false).contains("md:col-span-2"));
    }

    #[test]
    fn card_class_carries_entrance_state() {
        let skill = &SKILLS[2];
        assert!(card_class(skill, false).contains("opacity-0"));
        assert!(card_class(skill, true).contains("opacity-100"));
    }

    #[test]
    fn float_delay_staggers_by_position() {
        assert_eq!(float_delay(0), "animation-delay: 0ms");
        assert_eq!(float_delay(3), "animation-delay: 300ms");
    }
}
