//! Notice Component
//!
//! Transient banners and badges: the "submitted" banner on the enroll page,
//! the newsletter thank-you and the "Copied!" badge. The caller decides when
//! a notice is shown; this component only renders it.

use dioxus::prelude::*;

/// Tone of a notice
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NoticeTone {
    /// Something went through
    #[default]
    Success,
    /// Something failed
    Error,
    /// Neutral information
    Info,
}

impl NoticeTone {
    /// Returns the CSS class for this tone
    pub fn class(&self) -> &'static str {
        match self {
            NoticeTone::Success => "notice notice-success",
            NoticeTone::Error => "notice notice-error",
            NoticeTone::Info => "notice notice-info",
        }
    }

    /// Leading glyph
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeTone::Success => "\u{2713}",
            NoticeTone::Error => "\u{26A0}",
            NoticeTone::Info => "\u{2139}",
        }
    }

    /// ARIA role; errors interrupt, everything else is polite
    pub fn role(&self) -> &'static str {
        match self {
            NoticeTone::Error => "alert",
            _ => "status",
        }
    }
}

/// Properties for the Notice component
#[derive(Clone, PartialEq, Props)]
pub struct NoticeProps {
    /// Visual tone
    #[props(default)]
    pub tone: NoticeTone,
    /// Message shown next to the icon
    pub message: String,
    /// Optional dismiss handler; shows a close button when set
    #[props(default)]
    pub ondismiss: Option<EventHandler<()>>,
}

/// Displays a banner with an icon and optional dismiss button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if banner.read().is_pending() {
///         Notice { message: "Thank you! Your enrollment has been submitted.".to_string() }
///     }
/// }
/// ```
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let tone = props.tone;

    rsx! {
        div { class: "{tone.class()}", role: "{tone.role()}",
            span { class: "notice-icon", "{tone.icon()}" }
            span { class: "notice-message", "{props.message}" }
            if let Some(handler) = props.ondismiss {
                button {
                    class: "notice-dismiss",
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |_| handler.call(()),
                    "\u{00D7}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_classes() {
        assert_eq!(NoticeTone::Success.class(), "notice notice-success");
        assert_eq!(NoticeTone::Error.class(), "notice notice-error");
        assert_eq!(NoticeTone::Info.class(), "notice notice-info");
    }

    #[test]
    fn only_errors_are_alerts() {
        assert_eq!(NoticeTone::Error.role(), "alert");
        assert_eq!(NoticeTone::Success.role(), "status");
        assert_eq!(NoticeTone::Info.role(), "status");
    }

    #[test]
    fn default_tone_is_success() {
        assert_eq!(NoticeTone::default(), NoticeTone::Success);
    }
}
