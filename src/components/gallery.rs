//! Gallery Section
//!
//! A rotating headline word, the slide carousel with thumbnails, and the
//! student statistics and monthly progress chart, each revealed once it
//! scrolls into view.
//!
//! The carousel itself lives in [`SlideShow`], which only mounts when there
//! is at least one slide.

use std::time::Duration;

use dioxus::prelude::*;
use learnerspoint_core::config::Slide;
use learnerspoint_core::{Carousel, Rotator, SwipeGesture, SwipeOutcome, VisibilityOptions};
use learnerspoint_ui::{IconButton, ProgressBar};

use crate::context::{use_page_keys, use_site};
use crate::hooks::{use_machine, use_visibility};
use crate::theme::colors;

/// Delay between consecutive stat tiles once the stats are in view
const STAT_STAGGER_MS: u64 = 120;

#[component]
pub fn Gallery() -> Element {
    let site = use_site();
    let gallery = &site.gallery;

    let headline = use_machine(|| {
        Rotator::new(
            gallery.headline_words.len(),
            Duration::from_millis(gallery.headline_ms),
        )
    });
    let word = headline
        .read()
        .pick(&gallery.headline_words)
        .cloned()
        .unwrap_or_default();

    let seed = use_hook(|| match Carousel::new(gallery.slides.clone()) {
        Ok(carousel) => Some(carousel.with_interval(Duration::from_millis(gallery.autoplay_ms))),
        Err(e) => {
            tracing::warn!(error = %e, "Gallery has no slides; carousel hidden");
            None
        }
    });

    let stats = use_visibility(VisibilityOptions::once(0.3));
    let chart = use_visibility(VisibilityOptions::once(0.2));
    let stats_shown = stats.is_visible();
    let chart_shown = chart.is_visible();
    let stat_delays: Vec<u64> = (0..gallery.stats.len() as u64)
        .map(|i| i * STAT_STAGGER_MS)
        .collect();

    rsx! {
        section { class: "section", id: "gallery",
            div { class: "container",
                h2 { class: "gallery-headline",
                    "An "
                    span { class: "headline-word", "{word}" }
                    " Place to Learn"
                }
                p { class: "section-subtitle", "Moments from our classrooms, labs and celebrations." }

                if let Some(seed) = seed {
                    SlideShow { seed }
                }

                div { class: "stats-grid", onmounted: stats.track(),
                    for (stat, delay) in gallery.stats.iter().zip(stat_delays.iter()) {
                        div {
                            key: "{stat.label}",
                            class: if stats_shown { "stat-tile revealed" } else { "stat-tile" },
                            style: "transition-delay: {delay}ms;",
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }

                div { class: "chart", onmounted: chart.track(),
                    div { class: "chart-title", "Monthly Student Progress" }
                    for point in gallery.progress.iter() {
                        div { key: "{point.month}", class: "chart-row",
                            span { class: "chart-month", "{point.month}" }
                            ProgressBar {
                                value: if chart_shown { point.avg_score as f64 } else { 0.0 },
                                label: format!("Average score {}%", point.avg_score),
                                color: colors::CHART_SCORE.to_string(),
                            }
                            ProgressBar {
                                value: if chart_shown { point.engagement as f64 } else { 0.0 },
                                label: format!("Engagement {}%", point.engagement),
                                color: colors::CHART_ENGAGEMENT.to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The slide carousel: arrows, dots, counter, fullscreen, keyboard, swipe,
/// thumbnails and auto-advance.
#[component]
fn SlideShow(seed: Carousel<Slide>) -> Element {
    let mut carousel = use_machine(move || seed);
    let mut gesture = use_signal(SwipeGesture::default);

    let mut finish_swipe = move |x: f64| {
        let outcome = gesture.write().end(x);
        if outcome != SwipeOutcome::Ignored {
            carousel.write().apply_swipe(outcome);
        }
    };

    // Keys arrive from the shell root, so they work wherever focus is
    let keys = use_page_keys();
    let mut handled: Signal<u64> = use_signal(|| keys.last.peek().map_or(0, |press| press.seq));
    use_effect(move || {
        let Some(press) = (keys.last)() else {
            return;
        };
        if press.seq <= *handled.peek() {
            return;
        }
        handled.set(press.seq);
        carousel.write().handle_key(press.key);
    });

    let state = carousel.read();
    let slide = state.current_item().clone();
    let current = state.current();
    let stamp = state.transitions();
    let slide_class = format!("carousel-slide {}", state.direction().class());
    let counter = state.counter();
    let fullscreen = state.is_fullscreen();
    let slides: Vec<(usize, Slide)> = state.items().iter().cloned().enumerate().collect();
    drop(state);
    let dot_labels: Vec<String> = (1..=slides.len()).map(|n| format!("Go to slide {n}")).collect();

    rsx! {
        div {
            class: if fullscreen { "carousel fullscreen" } else { "carousel" },
            "aria-roledescription": "carousel",

            div {
                class: "carousel-stage",
                onmousedown: move |e| gesture.write().begin(e.client_coordinates().x),
                onmouseup: move |e| finish_swipe(e.client_coordinates().x),
                onmouseleave: move |_| gesture.write().cancel(),
                ontouchstart: move |e| {
                    if let Some(touch) = e.touches().first() {
                        gesture.write().begin(touch.client_coordinates().x);
                    }
                },
                ontouchend: move |e| {
                    match e.touches_changed().first() {
                        Some(touch) => finish_swipe(touch.client_coordinates().x),
                        None => gesture.write().cancel(),
                    }
                },

                // Keyed by transition count so the slide-in animation replays
                for stamp in std::iter::once(stamp) {
                    img {
                        key: "{stamp}",
                        class: "{slide_class}",
                        src: "{slide.image}",
                        alt: "{slide.alt}",
                        draggable: "false",
                    }
                }

                div { class: "carousel-caption",
                    h3 { "{slide.caption}" }
                    p { "{slide.description}" }
                }

                IconButton {
                    class: "carousel-prev".to_string(),
                    aria_label: "Previous slide".to_string(),
                    onclick: move |_| carousel.write().prev(),
                    "\u{2039}"
                }
                IconButton {
                    class: "carousel-next".to_string(),
                    aria_label: "Next slide".to_string(),
                    onclick: move |_| carousel.write().next(),
                    "\u{203A}"
                }

                div { class: "carousel-toolbar",
                    span { class: "carousel-counter", "{counter}" }
                    IconButton {
                        aria_label: if fullscreen { "Exit fullscreen".to_string() } else { "Fullscreen".to_string() },
                        onclick: move |_| carousel.write().toggle_fullscreen(),
                        if fullscreen { "\u{2715}" } else { "\u{26F6}" }
                    }
                }

                div { class: "carousel-dots",
                    for (index, label) in dot_labels.into_iter().enumerate() {
                        button {
                            key: "dot-{index}",
                            class: if index == current { "carousel-dot active" } else { "carousel-dot" },
                            "aria-label": "{label}",
                            onclick: move |_| carousel.write().go_to(index as isize),
                        }
                    }
                }
            }

            if !fullscreen {
                div { class: "thumbnails",
                    for (index, thumb) in slides.into_iter() {
                        button {
                            key: "thumb-{index}",
                            class: if index == current { "thumbnail active" } else { "thumbnail" },
                            onclick: move |_| carousel.write().go_to(index as isize),
                            img { src: "{thumb.image}", alt: "{thumb.alt}" }
                        }
                    }
                }
            }
        }
    }
}
