//! Site footer: quick links, programs, upcoming events, contact details and
//! the newsletter signup.

use std::time::Duration;

use chrono::Datelike;
use dioxus::prelude::*;
use learnerspoint_core::Deadline;
use learnerspoint_ui::{Button, ButtonVariant, Input, Notice, NoticeTone};

use crate::app::Route;
use crate::context::{use_anchors, use_site, Section};
use crate::hooks::use_machine;

/// Current calendar year for the copyright line.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let anchors = use_anchors();
    let route = use_route::<Route>();
    let on_home = route == (Route::Home {});

    let mut email = use_signal(String::new);
    let mut thanks = use_machine(|| {
        Deadline::idle(Duration::from_millis(site.footer.newsletter_ms))
    });

    let onsubscribe = move |e: FormEvent| {
        e.prevent_default();
        if !email.read().contains('@') {
            return;
        }
        tracing::info!("Newsletter signup");
        thanks.write().arm();
        email.set(String::new());
    };

    let year = copyright_year();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h4 { "{site.brand.name}" }
                        p { "{site.brand.tagline} in {site.brand.city}." }
                    }

                    div {
                        h4 { "Quick Links" }
                        ul {
                            for section in Section::ALL {
                                li { key: "{section.anchor()}",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| {
                                            anchors.request(section);
                                            if !on_home {
                                                navigator().push(Route::Home {});
                                            }
                                        },
                                        "{section.label()}"
                                    }
                                }
                            }
                            li {
                                Link { to: Route::Enroll { query: String::new() }, "Enroll" }
                            }
                        }
                    }

                    div {
                        h4 { "Programs" }
                        ul {
                            for program in site.footer.programs.iter() {
                                li { key: "{program}", "{program}" }
                            }
                        }
                    }

                    div {
                        h4 { "Upcoming Events" }
                        ul {
                            for event in site.footer.events.iter() {
                                li { key: "{event.title}",
                                    div { "{event.title}" }
                                    div { class: "event-date", "{event.date}" }
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Stay Updated" }
                        p { "{site.brand.address}" }
                        p { "{site.brand.phone}" }
                        p { "{site.brand.primary_email}" }
                        if thanks.read().is_pending() {
                            Notice {
                                tone: NoticeTone::Info,
                                message: "Thanks for subscribing!".to_string(),
                            }
                        }
                        form { class: "newsletter", onsubmit: onsubscribe,
                            Input {
                                name: "newsletter".to_string(),
                                input_type: "email".to_string(),
                                placeholder: "Your email".to_string(),
                                required: true,
                                value: email(),
                                oninput: move |s| email.set(s),
                            }
                            Button { button_type: "submit".to_string(), "Subscribe" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    span { "\u{00A9} {year} {site.brand.name}. All rights reserved." }
                    span { "{site.brand.tagline}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_year_is_current() {
        assert!(copyright_year() >= 2024);
    }
}
