//! Form relay.
//!
//! The enrollment, payment and contact forms are forwarded to a third-party
//! form-to-email service. This module builds the submission (field names and
//! relay control fields), validates the required fields, posts it, and
//! recognises the `success=true` marker the pages show a banner for.

use std::future::Future;

use serde::Deserialize;

use crate::config::RelaySettings;
use crate::error::{SiteError, SiteResult};

/// Query marker a page is loaded with after a successful submission
pub const SUCCESS_QUERY: &str = "success=true";

/// Which form is being submitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Enrollment,
    Payment,
    Contact,
}

impl FormKind {
    /// Subject line of the relayed email
    pub fn subject(self) -> &'static str {
        match self {
            FormKind::Enrollment => "New Enrollment Submission",
            FormKind::Payment => "New Enrollment Payment",
            FormKind::Contact => "New Contact Message",
        }
    }
}

/// Values typed into a form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    /// Full name and email are required; email must contain `@`.
    pub fn validate(&self) -> SiteResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(SiteError::MissingField("fullName"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SiteError::MissingField("email"));
        }
        if !email.contains('@') {
            return Err(SiteError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

/// A validated, relay-ready set of fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    kind: FormKind,
    fields: Vec<(&'static str, String)>,
}

impl Submission {
    pub fn enrollment(fields: &ContactFields) -> SiteResult<Self> {
        Self::with_contact(FormKind::Enrollment, fields)
    }

    pub fn contact(fields: &ContactFields) -> SiteResult<Self> {
        Self::with_contact(FormKind::Contact, fields)
    }

    /// The payment form only confirms the UPI method.
    pub fn payment() -> Self {
        let mut submission = Self::base(FormKind::Payment);
        submission.fields.push(("paymentMethod", "UPI".to_string()));
        submission
    }

    /// The submission for `kind`. Payment ignores `fields`.
    pub fn for_kind(kind: FormKind, fields: &ContactFields) -> SiteResult<Self> {
        match kind {
            FormKind::Enrollment => Self::enrollment(fields),
            FormKind::Contact => Self::contact(fields),
            FormKind::Payment => Ok(Self::payment()),
        }
    }

    fn with_contact(kind: FormKind, fields: &ContactFields) -> SiteResult<Self> {
        fields.validate()?;
        let mut submission = Self::base(kind);
        submission.fields.extend([
            ("fullName", fields.full_name.trim().to_string()),
            ("email", fields.email.trim().to_string()),
            ("phone", fields.phone.trim().to_string()),
            ("message", fields.message.trim().to_string()),
        ]);
        Ok(submission)
    }

    fn base(kind: FormKind) -> Self {
        Self {
            kind,
            fields: vec![
                ("_subject", kind.subject().to_string()),
                ("_captcha", "false".to_string()),
                ("_template", "table".to_string()),
            ],
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Whether a page query string carries the success marker.
pub fn is_success_redirect(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == SUCCESS_QUERY)
}

/// Running count of submissions the relay accepted.
///
/// Landing on the success route again after a second submission does not
/// change the page's query, so pages compare counts instead to know whether
/// there is a new acceptance to confirm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Receipts {
    accepted: u64,
}

impl Receipts {
    /// Note one more accepted submission.
    pub fn record(&mut self) {
        self.accepted += 1;
    }

    pub fn count(&self) -> u64 {
        self.accepted
    }

    /// Whether anything was accepted since `seen`. Moves `seen` up to date.
    pub fn take_new(&self, seen: &mut u64) -> bool {
        let fresh = self.accepted != *seen;
        *seen = self.accepted;
        fresh
    }
}

/// Anything that can deliver a [`Submission`].
pub trait FormRelay {
    fn submit(&self, submission: &Submission) -> impl Future<Output = SiteResult<()>>;
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: serde_json::Value,
    #[serde(default)]
    message: Option<String>,
}

impl RelayReply {
    // The relay reports success as either "true" or true.
    fn accepted(&self) -> bool {
        match &self.success {
            serde_json::Value::Bool(ok) => *ok,
            serde_json::Value::String(s) => s == "true",
            _ => false,
        }
    }
}

/// Posts URL-encoded submissions to `{endpoint}/ajax/{destination}`.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    client: reqwest::Client,
    url: String,
}

impl HttpRelay {
    pub fn new(settings: &RelaySettings) -> SiteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: reqwest::Client, settings: &RelaySettings) -> Self {
        let url = format!(
            "{}/ajax/{}",
            settings.endpoint.trim_end_matches('/'),
            settings.destination
        );
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FormRelay for HttpRelay {
    async fn submit(&self, submission: &Submission) -> SiteResult<()> {
        tracing::info!(kind = ?submission.kind(), url = %self.url, "Relaying form submission");

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(submission.fields())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply: Option<RelayReply> = serde_json::from_str(&body).ok();

        if status.is_success() && reply.as_ref().is_some_and(RelayReply::accepted) {
            return Ok(());
        }

        let message = reply
            .and_then(|r| r.message)
            .unwrap_or_else(|| body.chars().take(200).collect());
        tracing::warn!(status = status.as_u16(), %message, "Relay rejected submission");
        Err(SiteError::RelayRejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: String::new(),
            message: "Class 10 maths".to_string(),
        }
    }

    #[test]
    fn requires_name_and_email() {
        let mut fields = filled();
        fields.full_name = "  ".to_string();
        assert!(matches!(
            fields.validate(),
            Err(SiteError::MissingField("fullName"))
        ));

        let mut fields = filled();
        fields.email.clear();
        assert!(matches!(fields.validate(), Err(SiteError::MissingField("email"))));

        let mut fields = filled();
        fields.email = "asha.example.com".to_string();
        assert!(matches!(fields.validate(), Err(SiteError::InvalidEmail(_))));

        assert!(filled().validate().is_ok());
    }

    #[test]
    fn enrollment_carries_relay_controls() {
        let submission = Submission::enrollment(&filled()).unwrap();
        assert_eq!(submission.kind(), FormKind::Enrollment);
        assert_eq!(submission.get("_subject"), Some("New Enrollment Submission"));
        assert_eq!(submission.get("_captcha"), Some("false"));
        assert_eq!(submission.get("_template"), Some("table"));
        assert_eq!(submission.get("fullName"), Some("Asha Verma"));
        assert_eq!(submission.get("phone"), Some(""));
    }

    #[test]
    fn payment_needs_no_fields() {
        let submission = Submission::payment();
        assert_eq!(submission.get("paymentMethod"), Some("UPI"));
        assert_eq!(submission.get("_subject"), Some("New Enrollment Payment"));
        assert_eq!(submission.get("email"), None);
    }

    #[test]
    fn builds_by_kind() {
        let empty = ContactFields::default();
        assert!(Submission::for_kind(FormKind::Payment, &empty).is_ok());
        assert!(Submission::for_kind(FormKind::Contact, &empty).is_err());

        let contact = Submission::for_kind(FormKind::Contact, &filled()).unwrap();
        assert_eq!(contact.get("_subject"), Some("New Contact Message"));
    }

    #[test]
    fn success_marker() {
        assert!(is_success_redirect("success=true"));
        assert!(is_success_redirect("?ref=mail&success=true"));
        assert!(!is_success_redirect(""));
        assert!(!is_success_redirect("success=false"));
    }

    #[test]
    fn receipts_report_each_acceptance_once() {
        let mut receipts = Receipts::default();
        let mut seen = receipts.count();
        assert!(!receipts.take_new(&mut seen));

        receipts.record();
        assert!(receipts.take_new(&mut seen));
        assert!(!receipts.take_new(&mut seen));

        receipts.record();
        assert!(receipts.take_new(&mut seen));
        assert_eq!(seen, 2);
    }

    #[test]
    fn relay_url_from_settings() {
        let settings = RelaySettings {
            endpoint: "https://relay.example/".to_string(),
            destination: "office@example.com".to_string(),
            banner_ms: 5000,
        };
        let relay = HttpRelay::with_client(reqwest::Client::new(), &settings);
        assert_eq!(relay.url(), "https://relay.example/ajax/office@example.com");
    }
}
