//! "About Us" section: what sets the centre apart, as expandable cards.

use dioxus::prelude::*;

use super::info_card::InfoCard;
use crate::context::{use_site, Section};
use crate::hooks::use_section_anchor;

const FEATURE_STAGGER_MS: u64 = 200;

#[component]
pub fn FeatureCards() -> Element {
    let site = use_site();
    let anchor = use_section_anchor(Section::About);

    rsx! {
        section { class: "section section-alt", id: Section::About.anchor(), onmounted: anchor,
            div { class: "container",
                h2 { class: "section-title", "Why Choose " span { class: "accent", "{site.brand.name}" } }
                p { class: "section-subtitle", "{site.brand.tagline}, one student at a time." }
                div { class: "card-grid",
                    for (index, entry) in site.features.iter().enumerate() {
                        InfoCard {
                            key: "{entry.title}",
                            entry: entry.clone(),
                            index,
                            stagger_ms: FEATURE_STAGGER_MS,
                        }
                    }
                }
            }
        }
    }
}
