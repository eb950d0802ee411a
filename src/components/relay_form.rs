//! Forms delivered through the mail relay.
//!
//! `RelayForm` collects name, email, phone and message for the enrollment and
//! contact forms; `PaymentPanel` confirms a UPI payment. Both send through
//! [`HttpRelay`] and, once the relay accepts, navigate to the page's
//! `?success=true` route where the confirmation banner is shown.

use dioxus::prelude::*;
use learnerspoint_core::config::RelaySettings;
use learnerspoint_core::relay::SUCCESS_QUERY;
use learnerspoint_core::{ContactFields, FormKind, FormRelay, HttpRelay, Receipts, Submission};
use learnerspoint_ui::{Button, ButtonVariant, Input, Notice, NoticeTone, TextArea};

use crate::app::Route;
use crate::context::{use_receipts, use_site};

/// Where the relay "redirects" after accepting a form of `kind`.
pub fn success_route(kind: FormKind) -> Route {
    let query = SUCCESS_QUERY.to_string();
    match kind {
        FormKind::Enrollment | FormKind::Payment => Route::Enroll { query },
        FormKind::Contact => Route::ContactPage { query },
    }
}

/// In-flight state of one form.
#[derive(Clone, Copy)]
pub struct RelayState {
    sending: Signal<bool>,
    error: Signal<Option<String>>,
    settings: Signal<RelaySettings>,
    receipts: Signal<Receipts>,
}

impl RelayState {
    pub fn is_sending(&self) -> bool {
        (self.sending)()
    }

    pub fn error(&self) -> Option<String> {
        (self.error)()
    }

    pub fn clear_error(mut self) {
        self.error.set(None);
    }

    /// Validate, post and navigate on success. Failures stay on the page as
    /// an error notice; nothing is retried.
    pub fn send(mut self, kind: FormKind, fields: &ContactFields, on_sent: impl FnOnce() + 'static) {
        if self.is_sending() {
            return;
        }
        let submission = match Submission::for_kind(kind, fields) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(?kind, error = %e, "Form rejected before sending");
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        self.sending.set(true);
        self.error.set(None);
        let settings = self.settings.peek().clone();
        let nav = navigator();

        spawn(async move {
            let result = match HttpRelay::new(&settings) {
                Ok(relay) => relay.submit(&submission).await,
                Err(e) => Err(e),
            };
            self.sending.set(false);

            match result {
                Ok(()) => {
                    tracing::info!(?kind, "Form accepted by relay");
                    on_sent();
                    self.receipts.write().record();
                    nav.push(success_route(kind));
                }
                Err(e) => {
                    tracing::error!(?kind, error = %e, "Form submission failed");
                    self.error.set(Some(format!("Could not send the form: {e}")));
                }
            }
        });
    }
}

/// Hook creating the in-flight state for a relay-backed form.
pub fn use_relay() -> RelayState {
    let site = use_site();
    RelayState {
        sending: use_signal(|| false),
        error: use_signal(|| None),
        settings: use_signal(|| site.relay.clone()),
        receipts: use_receipts(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct RelayFormProps {
    /// Enrollment or contact
    pub kind: FormKind,
    /// Label of the message textarea
    #[props(default = "Message".to_string())]
    pub message_label: String,
    /// Extra buttons rendered after submit
    #[props(default)]
    pub children: Element,
}

/// Name / email / phone / message form.
#[component]
pub fn RelayForm(props: RelayFormProps) -> Element {
    let mut fields = use_signal(ContactFields::default);
    let relay = use_relay();
    let kind = props.kind;

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let snapshot = fields.read().clone();
        relay.send(kind, &snapshot, move || fields.set(ContactFields::default()));
    };

    let current = fields();

    rsx! {
        form { class: "relay-form", onsubmit: onsubmit,
            if let Some(message) = relay.error() {
                Notice {
                    tone: NoticeTone::Error,
                    message: message,
                    ondismiss: move |_| relay.clear_error(),
                }
            }
            Input {
                id: "fullName".to_string(),
                name: "fullName".to_string(),
                label: "Full Name".to_string(),
                placeholder: "Enter your full name".to_string(),
                required: true,
                value: current.full_name.clone(),
                oninput: move |s| fields.write().full_name = s,
            }
            Input {
                id: "email".to_string(),
                name: "email".to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                placeholder: "Enter your email".to_string(),
                required: true,
                value: current.email.clone(),
                oninput: move |s| fields.write().email = s,
            }
            Input {
                id: "phone".to_string(),
                name: "phone".to_string(),
                label: "Phone".to_string(),
                input_type: "tel".to_string(),
                placeholder: "Enter your phone number".to_string(),
                value: current.phone.clone(),
                oninput: move |s| fields.write().phone = s,
            }
            TextArea {
                id: "message".to_string(),
                name: "message".to_string(),
                label: props.message_label.clone(),
                placeholder: "Tell us about your learning goals or any questions you have".to_string(),
                value: current.message.clone(),
                oninput: move |s| fields.write().message = s,
            }
            div { class: "hero-actions",
                Button {
                    button_type: "submit".to_string(),
                    disabled: relay.is_sending(),
                    if relay.is_sending() { "Sending..." } else { "Submit" }
                }
                {props.children}
            }
        }
    }
}

/// UPI payment confirmation.
#[component]
pub fn PaymentPanel(onback: EventHandler<()>) -> Element {
    let site = use_site();
    let enroll = &site.enroll;
    let relay = use_relay();

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        relay.send(FormKind::Payment, &ContactFields::default(), || {});
    };

    rsx! {
        form { class: "payment-panel", onsubmit: onsubmit,
            if let Some(message) = relay.error() {
                Notice { tone: NoticeTone::Error, message: message }
            }
            h4 { "Scan QR Code to Pay" }
            img { class: "payment-qr", src: "{enroll.qr_image}", alt: "UPI Payment QR Code" }
            p { class: "upi-id", "UPI ID: {enroll.upi_id}" }
            p { class: "payment-total",
                span { "Total Amount: " }
                strong { "{enroll.amount}" }
            }
            Button {
                button_type: "submit".to_string(),
                disabled: relay.is_sending(),
                "Complete Payment"
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| onback.call(()),
                "Back to enrollment form"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_and_payment_return_to_enroll() {
        for kind in [FormKind::Enrollment, FormKind::Payment] {
            assert_eq!(
                success_route(kind),
                Route::Enroll {
                    query: "success=true".to_string()
                }
            );
        }
    }

    #[test]
    fn contact_returns_to_contact_page() {
        assert_eq!(
            success_route(FormKind::Contact).to_string(),
            "/Contact?success=true"
        );
    }
}
