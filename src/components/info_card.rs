//! Expandable Card Component
//!
//! One service or feature card: optional image, title, summary and a
//! "Read More" toggle revealing the details. Each card enters with its
//! presentation variant's transform after a staggered delay.

use std::time::Duration;

use dioxus::prelude::*;
use learnerspoint_core::config::CardEntry;
use learnerspoint_core::{ExpandableCard, VisibilityOptions};
use learnerspoint_ui::{Button, ButtonVariant};

use crate::hooks::use_staggered_reveal;

/// Inline style for a card given its presentation and reveal state.
pub fn card_style(entry: &CardEntry, revealed: bool) -> String {
    let style = entry.presentation.style();
    if revealed {
        format!("--card-accent: {};", style.accent)
    } else {
        format!("--card-accent: {}; transform: {};", style.accent, style.hidden)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct InfoCardProps {
    /// Card content and presentation
    pub entry: CardEntry,
    /// Position within its group (drives the entrance delay)
    pub index: usize,
    /// Entrance delay between consecutive cards
    pub stagger_ms: u64,
}

#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    let entry = &props.entry;
    let look = entry.presentation.style();
    let mut card = use_signal(ExpandableCard::default);
    let mut hovered = use_signal(|| false);
    let (visibility, revealed) = use_staggered_reveal(
        props.index,
        Duration::from_millis(props.stagger_ms),
        VisibilityOptions::default(),
    );

    let class = if revealed {
        format!("card {} revealed", look.class)
    } else {
        format!("card {}", look.class)
    };
    let style = card_style(entry, revealed);
    let image_style = if hovered() {
        format!("transform: {}; filter: {};", look.hover, look.hover_filter)
    } else {
        String::new()
    };
    let title_style = if hovered() {
        format!("color: {};", look.accent)
    } else {
        String::new()
    };
    let details_style = format!("--expand-from: {};", look.expand_from);
    let expanded = card.read().is_expanded();
    let toggle_label = card.read().toggle_label();

    rsx! {
        article {
            class: "{class}",
            style: "{style}",
            onmounted: visibility.track(),
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            if let Some(image) = &entry.image {
                div { class: "card-image",
                    img { src: "{image}", alt: "{entry.title}", style: "{image_style}" }
                }
            }
            div { class: "card-body",
                h3 { class: "card-title", style: "{title_style}", "{entry.title}" }
                p { class: "card-summary", "{entry.summary}" }
                if expanded {
                    p { class: "card-details", style: "{details_style}", "{entry.details}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| card.write().toggle(),
                    "{toggle_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnerspoint_core::Presentation;

    fn entry(presentation: Presentation) -> CardEntry {
        CardEntry {
            title: "Weekly Tests".to_string(),
            summary: "Track progress".to_string(),
            details: "Board pattern tests".to_string(),
            image: None,
            presentation,
        }
    }

    #[test]
    fn hidden_cards_use_their_entrance_transform() {
        let style = card_style(&entry(Presentation::Rotate), false);
        assert!(style.contains("#9333EA"));
        assert!(style.contains("rotate(-5deg)"));
    }

    #[test]
    fn revealed_cards_drop_the_transform() {
        let style = card_style(&entry(Presentation::Slide), true);
        assert_eq!(style, "--card-accent: #16A34A;");
    }
}
