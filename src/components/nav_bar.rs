//! Navigation Bar Component
//!
//! Sticky header with the brand, section links and the "Enroll Now" call to
//! action. Section links scroll within the home page; from other pages they
//! navigate home first and scroll once the section is mounted.

use dioxus::prelude::*;
use learnerspoint_ui::{Button, ButtonVariant, IconButton};

use crate::app::Route;
use crate::context::{use_anchors, use_site, use_viewport, Section};

/// Scroll offset (px) after which the bar switches to its solid style
pub const SCROLLED_AFTER_PX: f64 = 20.0;

/// Whether a scroll offset counts as "scrolled".
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLLED_AFTER_PX
}

#[component]
pub fn NavBar() -> Element {
    let site = use_site();
    let viewport = use_viewport();
    let anchors = use_anchors();
    let route = use_route::<Route>();

    let mut active = use_signal(|| Section::Home);
    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    // Re-check the scroll offset whenever the viewport scrolls
    use_effect(move || {
        let _ = (viewport.scrolls)();
        let Some(root) = (viewport.root)() else {
            return;
        };
        spawn(async move {
            match root.get_scroll_offset().await {
                Ok(offset) => {
                    let now = is_scrolled(offset.y);
                    if *scrolled.peek() != now {
                        scrolled.set(now);
                    }
                }
                Err(e) => tracing::debug!(error = ?e, "Scroll offset unavailable"),
            }
        });
    });

    let on_home = route == (Route::Home {});
    let mut go_to = move |section: Section| {
        active.set(section);
        menu_open.set(false);
        anchors.request(section);
        if !on_home {
            navigator().push(Route::Home {});
        }
    };

    let bar_class = if scrolled() { "nav-bar scrolled" } else { "nav-bar" };
    let mobile_class = if menu_open() { "nav-mobile open" } else { "nav-mobile" };

    rsx! {
        nav { class: "{bar_class}",
            div { class: "container nav-inner",
                Link { class: "nav-brand", to: Route::Home {},
                    img { src: "{site.brand.logo}", alt: "{site.brand.name} logo" }
                    span { "{site.brand.name}" }
                }

                div { class: "nav-links",
                    for section in Section::ALL {
                        Button {
                            key: "{section.anchor()}",
                            variant: ButtonVariant::Nav,
                            class: if active() == section { "active".to_string() } else { String::new() },
                            onclick: move |_| go_to(section),
                            "{section.label()}"
                        }
                    }
                    Link { class: "btn-primary", to: Route::Enroll { query: String::new() }, "Enroll Now" }
                }

                IconButton {
                    class: "nav-toggle".to_string(),
                    aria_label: if menu_open() { "Close menu".to_string() } else { "Open menu".to_string() },
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "\u{2715}" } else { "\u{2630}" }
                }
            }

            div { class: "{mobile_class}",
                for section in Section::ALL {
                    Button {
                        key: "mobile-{section.anchor()}",
                        variant: ButtonVariant::Nav,
                        class: if active() == section { "active".to_string() } else { String::new() },
                        onclick: move |_| go_to(section),
                        "{section.label()}"
                    }
                }
                Link { class: "btn-primary", to: Route::Enroll { query: String::new() }, "Enroll Now" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_twenty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(400.0));
    }
}
