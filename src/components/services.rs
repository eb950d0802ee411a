//! Services section: one expandable card per tutoring service.

use dioxus::prelude::*;

use super::info_card::InfoCard;
use crate::context::{use_site, Section};
use crate::hooks::use_section_anchor;

/// Entrance delay between consecutive service cards
const SERVICE_STAGGER_MS: u64 = 150;

#[component]
pub fn Services() -> Element {
    let site = use_site();
    let anchor = use_section_anchor(Section::Services);

    rsx! {
        section { class: "section", id: Section::Services.anchor(), onmounted: anchor,
            div { class: "container",
                h2 { class: "section-title", "Our " span { class: "accent", "Services" } }
                p { class: "section-subtitle",
                    "Personal attention, proven methods and steady results for every learner."
                }
                div { class: "card-grid",
                    for (index, entry) in site.services.iter().enumerate() {
                        InfoCard {
                            key: "{entry.title}",
                            entry: entry.clone(),
                            index,
                            stagger_ms: SERVICE_STAGGER_MS,
                        }
                    }
                }
            }
        }
    }
}
