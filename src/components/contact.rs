//! Contact section: info cards, the local-only form, and the page footer

use dioxus::prelude::*;
use futures_util::StreamExt;
use serde::Serialize;
use tracing::info;

use super::entrance_class;
use crate::reveal::use_scroll_reveal;

/// How long the submit confirmation stays on screen.
const CONFIRMATION_MILLIS: u32 = 3_000;

/// Local-only contact form fields. Cleared on submit, never transmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Reset every field, returning the values as they were.
    pub fn take(&mut self) -> ContactForm {
        std::mem::take(self)
    }
}

/// Direct contact channels shown beside the form.
struct ContactChannel {
    title: &'static str,
    icon: &'static str,
    display: &'static str,
    href: &'static str,
}

const CONTACT_CHANNELS: [ContactChannel; 2] = [
    ContactChannel {
        title: "Email",
        icon: "fa-solid fa-envelope",
        display: "contact@example.com",
        href: "mailto:contact@example.com",
    },
    ContactChannel {
        title: "Phone",
        icon: "fa-solid fa-phone",
        display: "+1 (234) 567-890",
        href: "tel:+1234567890",
    },
];

const CONNECT_LINKS: [(&str, &str); 3] = [
    ("GitHub", "fa-brands fa-github"),
    ("LinkedIn", "fa-brands fa-linkedin-in"),
    ("Email", "fa-solid fa-envelope"),
];

async fn confirmation_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(CONFIRMATION_MILLIS).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(CONFIRMATION_MILLIS))).await;
}

/// Contact section with reveal-tracked info cards and the footer.
///
/// Submitting logs the captured fields, clears the form, and shows a
/// confirmation banner that reverts after a fixed delay. Nothing leaves
/// the page.
#[component]
pub fn Contact() -> Element {
    let revealed = use_scroll_reveal("contact");
    let mut form = use_signal(ContactForm::default);
    let mut submitted = use_signal(|| false);

    let reset = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            confirmation_delay().await;
            submitted.set(false);
        }
    });

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let submission = form.write().take();
        match serde_json::to_string(&submission) {
            Ok(payload) => info!("contact form submitted: {payload}"),
            Err(error) => info!("contact form submitted (payload unavailable: {error})"),
        }
        submitted.set(true);
        reset.send(());
    };

    rsx! {
        section {
            id: "contact",
            class: "py-20 md:py-32 relative overflow-hidden",

            div { class: "container relative z-10",
                div { class: "scroll-reveal max-w-2xl mx-auto text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold mb-4", "Get in Touch" }
                    p { class: "text-lg text-muted-foreground",
                        "Let's discuss your infrastructure challenges and opportunities"
                    }
                }

                div { class: "grid md:grid-cols-2 gap-12 max-w-4xl mx-auto",
                    div { class: "space-y-8",
                        for (index, channel) in CONTACT_CHANNELS.iter().enumerate() {
                            div {
                                "data-reveal-index": "{index}",
                                class: "glass-card p-6 rounded-lg transition-all duration-700 {entrance_class(revealed.read().contains(index))}",
                                div { class: "flex items-start gap-4",
                                    div { class: "p-3 rounded-lg bg-accent/20 flex-shrink-0",
                                        i { class: "{channel.icon} text-accent text-xl" }
                                    }
                                    div {
                                        h3 { class: "font-semibold mb-2", "{channel.title}" }
                                        a {
                                            href: channel.href,
                                            class: "text-muted-foreground hover:text-accent transition-colors",
                                            "{channel.display}"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            "data-reveal-index": "{CONTACT_CHANNELS.len()}",
                            class: "glass-card p-6 rounded-lg transition-all duration-700 {entrance_class(revealed.read().contains(CONTACT_CHANNELS.len()))}",
                            h3 { class: "font-semibold mb-4", "Connect" }
                            div { class: "flex gap-4",
                                for (label, icon) in CONNECT_LINKS {
                                    a {
                                        href: "#",
                                        class: "p-3 rounded-lg bg-card/50 hover:bg-card/80 transition-colors glow-effect",
                                        aria_label: label,
                                        i { class: "{icon} text-lg" }
                                    }
                                }
                            }
                        }
                    }

                    form {
                        class: "glass-card p-8 rounded-lg space-y-6",
                        onsubmit: submit,

                        if submitted() {
                            div { class: "p-4 rounded-lg bg-accent/20 border border-accent/50 text-accent text-sm",
                                "✓ Thank you! Your message has been sent successfully."
                            }
                        }

                        div {
                            label {
                                r#for: "name",
                                class: "block text-sm font-medium mb-2",
                                "Name"
                            }
                            input {
                                r#type: "text",
                                id: "name",
                                name: "name",
                                required: true,
                                placeholder: "Your name",
                                value: "{form.read().name}",
                                class: "w-full px-4 py-3 rounded-lg bg-card/50 border border-border focus:border-accent focus:outline-none transition-colors",
                                oninput: move |event| form.write().name = event.value(),
                            }
                        }

                        div {
                            label {
                                r#for: "email",
                                class: "block text-sm font-medium mb-2",
                                "Email"
                            }
                            input {
                                r#type: "email",
                                id: "email",
                                name: "email",
                                required: true,
                                placeholder: "your@email.com",
                                value: "{form.read().email}",
                                class: "w-full px-4 py-3 rounded-lg bg-card/50 border border-border focus:border-accent focus:outline-none transition-colors",
                                oninput: move |event| form.write().email = event.value(),
                            }
                        }

                        div {
                            label {
                                r#for: "message",
                                class: "block text-sm font-medium mb-2",
                                "Message"
                            }
                            textarea {
                                id: "message",
                                name: "message",
                                required: true,
                                rows: "4",
                                placeholder: "Tell me about your project...",
                                value: "{form.read().message}",
                                class: "w-full px-4 py-3 rounded-lg bg-card/50 border border-border focus:border-accent focus:outline-none transition-colors resize-none",
                                oninput: move |event| form.write().message = event.value(),
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full px-6 py-3 rounded-lg bg-accent/20 border border-accent hover:bg-accent/30 text-accent font-semibold flex items-center justify-center gap-2 transition-all",
                            "Send Message"
                            i { class: "fa-solid fa-paper-plane" }
                        }
                    }
                }

                div { class: "mt-20 pt-12 border-t border-border text-center",
                    p { class: "text-sm text-muted-foreground mb-4",
                        "© 2026 Cloud DevOps Portfolio. All rights reserved."
                    }
                    div { class: "flex items-center justify-center gap-2 text-xs text-muted-foreground",
                        i { class: "fa-regular fa-message" }
                        span { "Built with Rust, Dioxus, and Tailwind CSS" }
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
    fn take_captures_and_clears() {
        let mut form = ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "Let's talk pipelines".into(),
        };
        let submission = form.take();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Let's talk pipelines");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn take_on_empty_form_yields_empty_fields() {
        let mut form = ContactForm::default();
        let submission = form.take();
        assert!(submission.name.is_empty());
        assert!(submission.email.is_empty());
        assert!(submission.message.is_empty());
    }

    #[test]
    fn form_serializes_all_three_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hello".into(),
        };
        let payload = serde_json::to_value(&form).unwrap();
        assert_eq!(payload["name"], "Ada");
        assert_eq!(payload["email"], "ada@example.com");
        assert_eq!(payload["message"], "hello");
    }
}
