//! Expandable cards and their presentation styles.

use serde::{Deserialize, Serialize};

/// Summary/full toggle owned by one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ExpandableCard {
    expanded: bool,
}

impl ExpandableCard {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Label of the toggle button
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Show Less"
        } else {
            "Read More"
        }
    }
}

/// Entrance / hover style of a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    #[default]
    Zoom,
    Rotate,
    Slide,
    Morph,
}

/// Visual parameters of a [`Presentation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentationStyle {
    /// CSS modifier class
    pub class: &'static str,
    /// Accent colour used for titles on hover
    pub accent: &'static str,
    /// Transform before the card has been revealed
    pub hidden: &'static str,
    /// Transform applied to the image on hover
    pub hover: &'static str,
    /// Filter applied to the image on hover
    pub hover_filter: &'static str,
    /// Transform the expanded text enters from
    pub expand_from: &'static str,
}

const PRESENTATION_STYLES: [(Presentation, PresentationStyle); 4] = [
    (
        Presentation::Zoom,
        PresentationStyle {
            class: "present-zoom",
            accent: "#2563EB",
            hidden: "translateY(20px) scale(0.9)",
            hover: "scale(1.1)",
            hover_filter: "brightness(1.1)",
            expand_from: "scale(0.9)",
        },
    ),
    (
        Presentation::Rotate,
        PresentationStyle {
            class: "present-rotate",
            accent: "#9333EA",
            hidden: "translateY(20px) rotate(-5deg)",
            hover: "rotate(5deg) scale(1.05)",
            hover_filter: "contrast(1.1)",
            expand_from: "rotate(-5deg)",
        },
    ),
    (
        Presentation::Slide,
        PresentationStyle {
            class: "present-slide",
            accent: "#16A34A",
            hidden: "translateX(-20px)",
            hover: "translateY(-10px)",
            hover_filter: "saturate(1.3)",
            expand_from: "translateX(-20px)",
        },
    ),
    (
        Presentation::Morph,
        PresentationStyle {
            class: "present-morph",
            accent: "#D97706",
            hidden: "translateY(20px)",
            hover: "scale(1.05)",
            hover_filter: "hue-rotate(30deg)",
            expand_from: "scale(0.95)",
        },
    ),
];

impl Presentation {
    pub const ALL: [Presentation; 4] = [
        Presentation::Zoom,
        Presentation::Rotate,
        Presentation::Slide,
        Presentation::Morph,
    ];

    /// Look up the style record for this variant.
    pub fn style(self) -> &'static PresentationStyle {
        PRESENTATION_STYLES
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, style)| style)
            .unwrap_or(&PRESENTATION_STYLES[0].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut card = ExpandableCard::default();
        assert!(!card.is_expanded());
        assert_eq!(card.toggle_label(), "Read More");
        card.toggle();
        assert!(card.is_expanded());
        assert_eq!(card.toggle_label(), "Show Less");
        card.toggle();
        assert!(!card.is_expanded());
    }

    #[test]
    fn cards_are_independent() {
        let mut cards = [ExpandableCard::default(); 3];
        cards[0].toggle();
        cards[2].toggle();
        assert!(cards[0].is_expanded());
        assert!(!cards[1].is_expanded());
        assert!(cards[2].is_expanded());
    }

    #[test]
    fn every_variant_has_its_own_style() {
        let classes: Vec<&str> = Presentation::ALL.iter().map(|p| p.style().class).collect();
        assert_eq!(
            classes,
            vec!["present-zoom", "present-rotate", "present-slide", "present-morph"]
        );
    }

    #[test]
    fn presentation_parses_from_lowercase() {
        let p: Presentation = serde_json::from_str("\"morph\"").unwrap();
        assert_eq!(p, Presentation::Morph);
        assert_eq!(p.style().accent, "#D97706");
    }
}
