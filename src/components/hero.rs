//! Hero Section
//!
//! Heading with the typewriter line, call-to-action buttons, the hero image
//! with floating stats, and the "Watch Video" modal.

use dioxus::prelude::*;
use learnerspoint_core::PhraseCycle;
use learnerspoint_ui::{Button, ButtonVariant, CloseButton};

use crate::app::Route;
use crate::context::{use_site, Section};
use crate::hooks::{use_machine, use_section_anchor};

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let hero = &site.hero;
    let anchor = use_section_anchor(Section::Home);
    let mut show_video = use_signal(|| false);

    let cycle = use_machine(|| {
        PhraseCycle::new(hero.phrases.clone(), hero.timing).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Hero typewriter has nothing to type");
            PhraseCycle::once(String::new(), hero.timing.typing_ms)
        })
    });
    let typed = cycle.read().text().to_string();

    rsx! {
        section { class: "hero", id: "home", onmounted: anchor,
            div { class: "container hero-grid",
                div { class: "hero-copy",
                    h1 { class: "hero-heading",
                        "{hero.heading}"
                        span { class: "typewriter",
                            "{typed}"
                            span { class: "typewriter-cursor" }
                        }
                    }
                    p { class: "hero-blurb", "{hero.blurb}" }
                    div { class: "hero-actions",
                        Button {
                            onclick: move |_| {
                                navigator().push(Route::Enroll { query: String::new() });
                            },
                            "Enroll Now"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_video.set(true),
                            "\u{25B6} Watch Video"
                        }
                    }
                }

                div { class: "hero-visual",
                    img { src: "{hero.image}", alt: "Students learning at {site.brand.name}" }
                    for stat in hero.stats.iter() {
                        div { key: "{stat.label}", class: "hero-stat",
                            div { class: "hero-stat-value", "{stat.value}" }
                            div { class: "hero-stat-label", "{stat.label}" }
                        }
                    }
                }
            }

            if show_video() {
                VideoModal { onclose: move |_| show_video.set(false) }
            }
        }
    }
}

/// Modal introducing the centre. Clicking the backdrop closes it.
#[component]
fn VideoModal(onclose: EventHandler<()>) -> Element {
    let site = use_site();

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| onclose.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h3 { "Discover {site.brand.name}" }
                    CloseButton { onclick: move |_| onclose.call(()) }
                }
                div { class: "modal-body",
                    div { class: "modal-icon", "\u{1F3AC}" }
                    p { "Our introduction video is on its way." }
                }
            }
        }
    }
}
