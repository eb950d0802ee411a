//! Enrollment page: campus location, enrollment form and UPI payment.

use std::time::Duration;

use dioxus::prelude::*;
use learnerspoint_core::{is_success_redirect, FormKind};
use learnerspoint_ui::{Button, ButtonVariant, IconButton, Notice};

use crate::components::{copyright_year, PaymentPanel, RelayForm};
use crate::context::{use_site, use_theme, Theme};
use crate::hooks::use_success_banner;

/// `/enroll`, optionally with the relay's `success=true` marker.
#[component]
pub fn Enroll(query: String) -> Element {
    let site = use_site();
    let mut theme = use_theme();
    let mut show_payment = use_signal(|| false);
    let banner = use_success_banner(
        is_success_redirect(&query),
        Duration::from_millis(site.relay.banner_ms),
    );

    let brand = &site.brand;
    let enroll = &site.enroll;
    let year = copyright_year();
    let form_title = if show_payment() {
        "Payment Information"
    } else {
        "Enrollment Form"
    };

    rsx! {
        div { class: "enroll-page",
            header { class: "container enroll-header",
                h1 { class: "nav-brand", "{brand.name}" }
                IconButton {
                    aria_label: theme().toggle_label().to_string(),
                    onclick: move |_| {
                        let next = theme().toggled();
                        tracing::debug!(theme = ?next, "Theme toggled");
                        theme.set(next);
                    },
                    if theme() == Theme::Dark { "\u{2600}" } else { "\u{263E}" }
                }
            }

            main { class: "container",
                section { class: "section-intro",
                    h2 { class: "section-title", "{enroll.heading}" }
                    p { class: "section-subtitle", "{enroll.intro}" }
                }

                div { class: "enroll-grid",
                    section { class: "form-card",
                        h3 { class: "card-title", "Visit Us" }
                        iframe {
                            class: "map-frame",
                            src: "{enroll.map_embed_url}",
                            title: "{brand.name} Location",
                            "loading": "lazy",
                        }
                        h4 { "Discover Our Campus" }
                        p { class: "card-summary", "{enroll.campus_blurb}" }
                        a {
                            class: "btn-ghost",
                            href: "{brand.directions_url}",
                            target: "_blank",
                            "Get Directions \u{2192}"
                        }
                    }

                    section { class: "form-card",
                        h3 { class: "card-title", "{form_title}" }
                        if banner.read().is_pending() {
                            Notice {
                                message: "Thank you for enrolling! We have received your information and will reach out soon.".to_string(),
                            }
                        }
                        if show_payment() {
                            PaymentPanel { onback: move |_| show_payment.set(false) }
                        } else {
                            RelayForm {
                                kind: FormKind::Enrollment,
                                message_label: "Additional Information".to_string(),
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| show_payment.set(true),
                                    "Continue to Payment"
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "footer-bottom container",
                p { "\u{00A9} {year} {brand.name}. All rights reserved." }
                p {
                    "For inquiries, contact us at "
                    a { href: "mailto:{site.relay.destination}", "{site.relay.destination}" }
                }
            }
        }
    }
}
