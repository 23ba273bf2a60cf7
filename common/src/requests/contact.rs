//! The contact form payload and the validation rules both sides apply to it.
//!
//! The frontend runs `field_errors` before submitting so that the user sees
//! per-field messages; the backend re-checks `missing_required` and
//! `has_valid_email` because the endpoint is reachable without the form.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

/// Subject used when the sender leaves the optional subject blank.
pub const DEFAULT_SUBJECT: &str = "New contact from portfolio";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Body of `POST /api/contact`.
///
/// Every field is optional on the wire: absent or `null` text fields become
/// empty strings so that an incomplete payload is reported as missing fields
/// instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Hidden form field. Humans never see it, so any content means a bot.
    #[serde(default, rename = "website", skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Per-field validation messages, `None` where the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Basic `local@domain.tld` shape check. Not an RFC 5322 parser.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

impl ContactSubmission {
    /// True when name, email or message is empty after trimming.
    pub fn missing_required(&self) -> bool {
        self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty()
    }

    pub fn has_valid_email(&self) -> bool {
        is_valid_email(&self.email)
    }

    pub fn is_honeypot_filled(&self) -> bool {
        self.honeypot
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }

    pub fn subject_or_default(&self) -> &str {
        match self.subject.as_deref().map(str::trim) {
            Some(subject) if !subject.is_empty() => subject,
            _ => DEFAULT_SUBJECT,
        }
    }

    /// Runs the form rules and returns the message to show under each field.
    pub fn field_errors(&self) -> FieldErrors {
        let name = self.name.trim().is_empty().then_some("Name is required");
        let email = if self.email.trim().is_empty() {
            Some("Email is required")
        } else if !self.has_valid_email() {
            Some("Email is invalid")
        } else {
            None
        };
        let message = self
            .message
            .trim()
            .is_empty()
            .then_some("Message is required");

        FieldErrors {
            name,
            email,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("  jane.doe+tag@mail.example.org "));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("jane x@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        assert!(submission("  ", "jane@x.com", "Hi").missing_required());
        assert!(submission("Jane", "", "Hi").missing_required());
        assert!(submission("Jane", "jane@x.com", "\n\t").missing_required());
        assert!(!submission("Jane", "jane@x.com", "Hi").missing_required());
    }

    #[test]
    fn absent_fields_deserialize_as_empty() {
        let parsed: ContactSubmission = serde_json::from_str(r#"{"email":"jane@x.com"}"#).unwrap();

        assert!(parsed.name.is_empty());
        assert!(parsed.message.is_empty());
        assert_eq!(parsed.subject, None);
        assert!(parsed.missing_required());
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let parsed: ContactSubmission = serde_json::from_str(
            r#"{"name":null,"email":"jane@x.com","subject":null,"message":null,"website":null}"#,
        )
        .unwrap();

        assert!(parsed.name.is_empty());
        assert!(parsed.message.is_empty());
        assert_eq!(parsed.subject, None);
        assert_eq!(parsed.honeypot, None);
        assert!(parsed.missing_required());
    }

    #[test]
    fn honeypot_uses_website_key() {
        let parsed: ContactSubmission = serde_json::from_str(
            r#"{"name":"Bot","email":"b@x.com","message":"buy","website":"http://spam"}"#,
        )
        .unwrap();
        assert!(parsed.is_honeypot_filled());

        let blank: ContactSubmission =
            serde_json::from_str(r#"{"name":"J","email":"j@x.com","message":"m","website":"  "}"#)
                .unwrap();
        assert!(!blank.is_honeypot_filled());
    }

    #[test]
    fn subject_defaults_when_blank() {
        let mut s = submission("Jane", "jane@x.com", "Hi");
        assert_eq!(s.subject_or_default(), DEFAULT_SUBJECT);

        s.subject = Some("   ".to_string());
        assert_eq!(s.subject_or_default(), DEFAULT_SUBJECT);

        s.subject = Some(" Hiring ".to_string());
        assert_eq!(s.subject_or_default(), "Hiring");
    }

    #[test]
    fn field_errors_report_each_field() {
        let errors = submission("", "not-an-email", "").field_errors();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is invalid"));
        assert_eq!(errors.message, Some("Message is required"));

        let errors = submission("Jane", "", "Hi").field_errors();
        assert_eq!(errors.email, Some("Email is required"));
        assert!(errors.name.is_none());

        assert!(submission("Jane", "jane@x.com", "Hi").field_errors().is_empty());
    }
}
