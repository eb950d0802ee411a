//! Contact Section
//!
//! Typed-out introduction, the coaching programs, contact details with
//! copy-to-clipboard email buttons, and the contact form. Shared by the home
//! page and the standalone `/Contact` page.

use std::time::Duration;

use dioxus::prelude::*;
use learnerspoint_core::{Deadline, FormKind, PhraseCycle, SiteError, SiteResult};
use learnerspoint_ui::{Notice, NoticeTone};

use super::relay_form::RelayForm;
use crate::context::{use_site, Section};
use crate::hooks::{use_machine, use_section_anchor, use_success_banner};

/// How long the "Copied" badge stays on an email button
const COPIED_BADGE_MS: u64 = 2000;

/// Per-character delay of the introduction
const INTRO_TYPING_MS: u64 = 40;

const INTRO: &str = "Have a question about our programs or want to book a free demo class? \
                     Reach out and our team will get back to you within a day.";

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> SiteResult<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| SiteError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| SiteError::Clipboard(e.to_string()))
}

#[derive(Props, Clone, PartialEq)]
pub struct ContactSectionProps {
    /// Whether the page was reached through the relay's success redirect
    #[props(default)]
    pub submitted: bool,
}

#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    let site = use_site();
    let anchor = use_section_anchor(Section::Contact);
    let banner = use_success_banner(
        props.submitted,
        Duration::from_millis(site.relay.banner_ms),
    );

    let intro = use_machine(|| PhraseCycle::once(INTRO, INTRO_TYPING_MS));
    let typed = intro.read().text().to_string();

    let mut copied = use_machine(|| Deadline::idle(Duration::from_millis(COPIED_BADGE_MS)));
    let mut copied_slot: Signal<Option<usize>> = use_signal(|| None);

    let mut copy_email = move |slot: usize, address: String| match copy_to_clipboard(&address) {
        Ok(()) => {
            tracing::debug!(%address, "Email copied");
            copied_slot.set(Some(slot));
            copied.write().arm();
        }
        Err(e) => tracing::warn!(error = %e, %address, "Copy to clipboard failed"),
    };

    let badge_on = copied.read().is_pending();
    let emails = [
        site.brand.primary_email.clone(),
        site.brand.secondary_email.clone(),
    ];

    rsx! {
        section { class: "section section-alt", id: Section::Contact.anchor(), onmounted: anchor,
            div { class: "container",
                h2 { class: "section-title", "Get in " span { class: "accent", "Touch" } }
                p { class: "contact-intro", "{typed}" }

                div { class: "programs-grid",
                    for program in site.programs.iter() {
                        div { key: "{program.title}", class: "program-card",
                            h3 { "{program.title}" }
                            div { class: "program-subtitle", "{program.subtitle}" }
                            p { "{program.description}" }
                            span { class: "program-duration", "{program.duration}" }
                        }
                    }
                }

                div { class: "contact-grid",
                    div { class: "contact-details",
                        div {
                            div { class: "contact-item-label", "Visit Us" }
                            p { "{site.brand.address}" }
                            a { href: "{site.brand.directions_url}", target: "_blank", "Get directions" }
                        }
                        div {
                            div { class: "contact-item-label", "Call Us" }
                            a { href: "tel:{site.brand.phone}", "{site.brand.phone}" }
                        }
                        div {
                            div { class: "contact-item-label", "Email Us" }
                            for (slot, address) in emails.into_iter().enumerate() {
                                div { key: "{address}", class: "email-row",
                                    a { href: "mailto:{address}", "{address}" }
                                    button {
                                        r#type: "button",
                                        class: if badge_on && copied_slot() == Some(slot) { "copy-button copied" } else { "copy-button" },
                                        onclick: {
                                            let address = address.clone();
                                            move |_| copy_email(slot, address.clone())
                                        },
                                        if badge_on && copied_slot() == Some(slot) { "Copied" } else { "Copy" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "form-card",
                        h3 { "Send Us a Message" }
                        if banner.read().is_pending() {
                            Notice {
                                tone: NoticeTone::Success,
                                message: "Thank you! Your message has been sent. We'll be in touch soon.".to_string(),
                            }
                        }
                        RelayForm { kind: FormKind::Contact }
                    }
                }
            }
        }
    }
}
