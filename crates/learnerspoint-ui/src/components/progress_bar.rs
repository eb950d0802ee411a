//! Progress Bar Component
//!
//! Horizontal fill bar used by the loading screen and the gallery's monthly
//! progress chart. The fill width animates through CSS when `value` changes.

use dioxus::prelude::*;

use super::button::join_class;

/// Clamps `value` to `[0, max]` and returns it as a percentage of `max`.
pub fn fill_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value.clamp(0.0, max) / max) * 100.0
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Current value
    pub value: f64,
    /// Value that fills the bar
    #[props(default = 100.0)]
    pub max: f64,
    /// Optional caption rendered above the bar
    #[props(default)]
    pub label: Option<String>,
    /// Fill color; defaults to the stylesheet's accent
    #[props(default)]
    pub color: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = fill_percent(props.value, props.max);
    let track_class = join_class("progress-track", props.class.as_deref());
    let fill_style = match &props.color {
        Some(color) => format!("width: {percent:.1}%; background: {color};"),
        None => format!("width: {percent:.1}%;"),
    };

    rsx! {
        div { class: "progress",
            if let Some(label) = &props.label {
                div { class: "progress-label", "{label}" }
            }
            div {
                class: "{track_class}",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "{props.max}",
                "aria-valuenow": "{props.value}",
                div { class: "progress-fill", style: "{fill_style}" }
            }
        }
    }
}
