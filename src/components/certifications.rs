//! Certifications section: credential cards, summary, and verification links

use dioxus::prelude::*;

use super::entrance_class;
use crate::reveal::use_scroll_reveal;

/// One professional credential.
struct Certification {
    title: &'static str,
    issuer: &'static str,
    description: &'static str,
    issued: &'static str,
    expires: &'static str,
    credential_id: &'static str,
    verification_url: &'static str,
    badge_gradient: &'static str,
}

const CERTIFICATIONS: [Certification; 6] = [
    Certification {
        title: "AWS Certified Solutions Architect - Professional",
        issuer: "Amazon Web Services",
        description: "Advanced expertise in designing scalable, highly available systems on AWS",
        issued: "March 2023",
        expires: "March 2026",
        credential_id: "AWS-SA-PRO-2023-001",
        verification_url: "https://aws.amazon.com/certification/",
        badge_gradient: "from-orange-500 to-orange-600",
    },
    Certification {
        title: "Certified Kubernetes Administrator (CKA)",
        issuer: "Cloud Native Computing Foundation",
        description: "Proficiency in Kubernetes cluster administration and management",
        issued: "January 2023",
        expires: "January 2026",
        credential_id: "CKA-2023-12345",
        verification_url: "https://www.cncf.io/certification/cka/",
        badge_gradient: "from-blue-500 to-blue-600",
    },
    Certification {
        title: "Docker Certified Associate",
        issuer: "Docker",
        description: "Expertise in containerization and Docker platform",
        issued: "September 2022",
        expires: "September 2025",
        credential_id: "DCA-2022-98765",
        verification_url: "https://www.docker.com/certification/",
        badge_gradient: "from-cyan-500 to-cyan-600",
    },
    Certification {
        title: "HashiCorp Certified: Terraform Associate",
        issuer: "HashiCorp",
        description: "Proficiency in Infrastructure as Code using Terraform",
        issued: "June 2023",
        expires: "June 2025",
        credential_id: "HCTA-2023-54321",
        verification_url: "https://www.hashicorp.com/certification/",
        badge_gradient: "from-purple-500 to-purple-600",
    },
    Certification {
        title: "AWS Certified DevOps Engineer - Professional",
        issuer: "Amazon Web Services",
        description: "Advanced DevOps practices and CI/CD pipeline implementation",
        issued: "August 2022",
        expires: "August 2025",
        credential_id: "AWS-DEVOPS-PRO-2022-002",
        verification_url: "https://aws.amazon.com/certification/",
        badge_gradient: "from-orange-500 to-red-600",
    },
    Certification {
        title: "Linux Foundation Certified System Administrator",
        issuer: "Linux Foundation",
        description: "Expertise in Linux system administration and management",
        issued: "April 2022",
        expires: "April 2025",
        credential_id: "LFCSA-2022-11111",
        verification_url: "https://www.linuxfoundation.org/certification/",
        badge_gradient: "from-yellow-500 to-orange-500",
    },
];

/// Count of distinct issuing organizations across the credential list.
fn distinct_issuers() -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for certification in &CERTIFICATIONS {
        if !seen.contains(&certification.issuer) {
            seen.push(certification.issuer);
        }
    }
    seen.len()
}

/// Credential grid with per-card reveal tracking and a computed summary row.
#[component]
pub fn Certifications() -> Element {
    let revealed = use_scroll_reveal("certifications");

    rsx! {
        section {
            id: "certifications",
            class: "py-20 md:py-32 relative overflow-hidden",

            div { class: "container relative z-10",
                div { class: "scroll-reveal max-w-2xl mb-16",
                    div { class: "flex items-center gap-3 mb-4",
                        i { class: "fa-solid fa-award text-accent text-3xl" }
                        h2 { class: "text-4xl md:text-5xl font-bold", "Certifications" }
                    }
                    p { class: "text-lg text-muted-foreground",
                        "Industry-recognized credentials validating expertise in cloud infrastructure, containerization, and DevOps practices"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for (index, certification) in CERTIFICATIONS.iter().enumerate() {
                        div {
                            "data-reveal-index": "{index}",
                            class: "glass-card p-6 rounded-lg transition-all duration-700 group {entrance_class(revealed.read().contains(index))}",

                            div { class: "mb-4",
                                div { class: "w-16 h-16 rounded-lg bg-gradient-to-br {certification.badge_gradient} flex items-center justify-center group-hover:scale-110 transition-transform",
                                    i { class: "fa-solid fa-shield-halved text-white text-2xl" }
                                }
                            }

                            h3 { class: "text-lg font-bold mb-2 group-hover:text-accent transition-colors",
                                "{certification.title}"
                            }
                            p { class: "text-sm text-accent font-semibold mb-3",
                                "{certification.issuer}"
                            }
                            p { class: "text-sm text-muted-foreground mb-4",
                                "{certification.description}"
                            }

                            div { class: "space-y-2 mb-4 text-xs text-muted-foreground",
                                div { class: "flex justify-between",
                                    span { "Issued:" }
                                    span { class: "font-medium", "{certification.issued}" }
                                }
                                div { class: "flex justify-between",
                                    span { "Expires:" }
                                    span { class: "font-medium", "{certification.expires}" }
                                }
                            }

                            div { class: "mb-4 p-3 rounded-lg bg-card/50 border border-border",
                                p { class: "text-xs text-muted-foreground mb-1", "Credential ID" }
                                p { class: "text-xs font-mono text-foreground break-all",
                                    "{certification.credential_id}"
                                }
                            }

                            a {
                                href: certification.verification_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "w-full flex items-center justify-center gap-2 px-4 py-2 rounded-lg bg-accent/20 hover:bg-accent/30 text-accent transition-colors text-sm font-medium",
                                "Verify Credential"
                                i { class: "fa-solid fa-arrow-up-right-from-square" }
                            }
                        }
                    }
                }

                div { class: "mt-16 pt-16 border-t border-border",
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        div { class: "glass-card p-6 rounded-lg text-center",
                            div { class: "text-4xl font-bold text-accent mb-2",
                                "{CERTIFICATIONS.len()}"
                            }
                            p { class: "text-sm text-muted-foreground", "Active Certifications" }
                        }
                        div { class: "glass-card p-6 rounded-lg text-center",
                            div { class: "text-4xl font-bold text-accent mb-2",
                                "{distinct_issuers()}"
                            }
                            p { class: "text-sm text-muted-foreground", "Issuing Organizations" }
                        }
                        div { class: "glass-card p-6 rounded-lg text-center",
                            div { class: "text-4xl font-bold text-accent mb-2", "100%" }
                            p { class: "text-sm text-muted-foreground", "Current & Valid" }
                        }
                    }
                }

                div { class: "mt-12 p-6 rounded-lg bg-accent/5 border border-accent/20",
                    p { class: "text-sm text-muted-foreground",
                        span { class: "text-accent font-semibold", "Note:" }
                        " All certifications are current and verified. Click \"Verify Credential\" on any certification to validate authenticity through the issuing organization's official verification system."
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
    fn counts_each_issuer_once() {
        assert_eq!(distinct_issuers(), 5);
    }

    #[test]
    fn every_credential_has_a_verification_url() {
        for certification in &CERTIFICATIONS {
            assert!(certification.verification_url.starts_with("https://"));
        }
    }
}
