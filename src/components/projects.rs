//! Featured projects section

use dioxus::prelude::*;

use super::entrance_class;
use crate::reveal::use_scroll_reveal;

/// One portfolio project card.
struct Project {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    link: &'static str,
    github: &'static str,
    image: &'static str,
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "Kubernetes Multi-Cloud Platform",
        description: "Designed and implemented a multi-cloud Kubernetes platform managing 50+ microservices across AWS, Azure, and GCP with automated failover and disaster recovery.",
        technologies: &["Kubernetes", "Terraform", "AWS", "Azure", "GCP"],
        link: "#",
        github: "#",
        image: "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=800&q=80",
    },
    Project {
        title: "CI/CD Pipeline Automation",
        description: "Built enterprise-grade CI/CD pipelines reducing deployment time by 75% and enabling 50+ daily deployments with zero-downtime releases.",
        technologies: &["Jenkins", "GitLab CI", "Docker", "Ansible"],
        link: "#",
        github: "#",
        image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&q=80",
    },
    Project {
        title: "Infrastructure as Code Migration",
        description: "Migrated legacy infrastructure to Terraform-managed IaC, achieving 100% infrastructure reproducibility and reducing provisioning time from days to minutes.",
        technologies: &["Terraform", "CloudFormation", "AWS", "Python"],
        link: "#",
        github: "#",
        image: "https://images.unsplash.com/photo-1516321318423-f06f70d504f0?w=800&q=80",
    },
    Project {
        title: "Monitoring & Observability Stack",
        description: "Deployed comprehensive monitoring solution with Prometheus, Grafana, and ELK stack, reducing MTTR by 60% through proactive alerting.",
        technologies: &["Prometheus", "Grafana", "ELK Stack", "Datadog"],
        link: "#",
        github: "#",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
    },
    Project {
        title: "Disaster Recovery & Backup",
        description: "Architected automated disaster recovery solution with cross-region replication, achieving RPO of 5 minutes and RTO of 15 minutes.",
        technologies: &["AWS", "Terraform", "Python", "Bash"],
        link: "#",
        github: "#",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80",
    },
    Project {
        title: "Security & Compliance Framework",
        description: "Implemented security scanning and compliance automation achieving SOC 2 compliance with automated vulnerability remediation.",
        technologies: &["Vault", "Trivy", "OPA", "Kubernetes"],
        link: "#",
        github: "#",
        image: "https://images.unsplash.com/photo-1555949519-2f4b104a6d5e?w=800&q=80",
    },
];

/// Project gallery with per-card reveal tracking.
#[component]
pub fn Projects() -> Element {
    let revealed = use_scroll_reveal("projects");

    rsx! {
        section {
            id: "projects",
            class: "py-20 md:py-32 relative overflow-hidden",

            div { class: "container relative z-10",
                div { class: "scroll-reveal max-w-2xl mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold mb-4", "Featured Projects" }
                    p { class: "text-lg text-muted-foreground",
                        "Production infrastructure projects showcasing automation, scalability, and reliability"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        div {
                            "data-reveal-index": "{index}",
                            class: "glass-card overflow-hidden rounded-lg transition-all duration-700 group {entrance_class(revealed.read().contains(index))}",

                            div { class: "relative h-48 overflow-hidden bg-card/50",
                                img {
                                    src: project.image,
                                    alt: project.title,
                                    class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-500",
                                }
                                div { class: "absolute inset-0 bg-gradient-to-t from-background via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" }
                            }

                            div { class: "p-6 space-y-4",
                                h3 { class: "text-xl font-bold group-hover:text-accent transition-colors",
                                    "{project.title}"
                                }
                                p { class: "text-sm text-muted-foreground leading-relaxed",
                                    "{project.description}"
                                }

                                div { class: "flex flex-wrap gap-2 pt-2",
                                    for technology in project.technologies {
                                        span { class: "px-3 py-1 text-xs rounded-full bg-accent/10 text-accent border border-accent/20",
                                            "{technology}"
                                        }
                                    }
                                }

                                div { class: "flex gap-3 pt-4 border-t border-border",
                                    a {
                                        href: project.link,
                                        class: "flex-1 flex items-center justify-center gap-2 px-4 py-2 rounded-lg bg-accent/20 hover:bg-accent/30 text-accent transition-colors text-sm font-medium",
                                        "View Project"
                                        i { class: "fa-solid fa-arrow-up-right-from-square" }
                                    }
                                    a {
                                        href: project.github,
                                        class: "flex items-center justify-center px-4 py-2 rounded-lg hover:bg-card/80 transition-colors",
                                        aria_label: "Source on GitHub",
                                        i { class: "fa-brands fa-github" }
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
