//! Input Field Components
//!
//! Labelled text inputs and textareas for the enrollment and contact forms.
//! Values are controlled: the caller owns the string and receives every edit.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

use super::button::join_class;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name
    #[props(default)]
    pub name: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, tel)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         name: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id("input", props.id.as_deref());
    let input_class = join_class("input-field", props.class.as_deref());
    let name = props.name.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if props.required {
                        span { class: "input-required", " *" }
                    }
                }
            }
            input {
                id: "{id}",
                name: "{name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Form field name
    #[props(default)]
    pub name: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id("textarea", props.id.as_deref());
    let name = props.name.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            textarea {
                id: "{id}",
                name: "{name}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

static NEXT_FIELD_ID: AtomicU32 = AtomicU32::new(1);

/// The given id, or a fresh `{prefix}-{n}` for label association.
fn field_id(prefix: &str, given: Option<&str>) -> String {
    match given {
        Some(id) => id.to_string(),
        None => format!(
            "{prefix}-{}",
            NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_is_kept() {
        assert_eq!(field_id("input", Some("fullName")), "fullName");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = field_id("input", None);
        let b = field_id("input", None);
        assert!(a.starts_with("input-"));
        assert_ne!(a, b);
    }
}
