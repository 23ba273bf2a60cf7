//! Form state for the contact component.
//!
//! `FormState` holds everything the view renders and is independent of Yew,
//! so the submission rules are testable without a browser.

use common::requests::{ContactSubmission, FieldErrors};

/// Shown when the honeypot is filled. No request is made.
pub const HONEYPOT_SUCCESS: &str =
    "Your message has been sent successfully! We'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Website,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Succeeded(String),
    Failed(String),
}

/// What `FormState::begin_submit` decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Field errors are now set; nothing to send.
    Invalid,
    /// Honeypot filled; the form already shows success.
    Discarded,
    Send(ContactSubmission),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub website: String,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Website => &self.website,
        }
    }

    /// Stores the new value and clears that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.name = value;
                self.errors.name = None;
            }
            Field::Email => {
                self.email = value;
                self.errors.email = None;
            }
            Field::Subject => self.subject = value,
            Field::Message => {
                self.message = value;
                self.errors.message = None;
            }
            Field::Website => self.website = value,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: Some(self.subject.clone()).filter(|s| !s.trim().is_empty()),
            message: self.message.clone(),
            honeypot: Some(self.website.clone()).filter(|s| !s.is_empty()),
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.website.clear();
    }

    pub fn begin_submit(&mut self) -> SubmitAction {
        let submission = self.submission();
        self.errors = submission.field_errors();
        if !self.errors.is_empty() {
            return SubmitAction::Invalid;
        }

        if submission.is_honeypot_filled() {
            self.clear_fields();
            self.status = SubmitStatus::Succeeded(HONEYPOT_SUCCESS.to_string());
            return SubmitAction::Discarded;
        }

        self.status = SubmitStatus::Sending;
        SubmitAction::Send(submission)
    }

    /// Applies the server's answer. Fields are cleared only on success.
    pub fn finish(&mut self, result: Result<String, String>) {
        match result {
            Ok(message) => {
                self.clear_fields();
                self.status = SubmitStatus::Succeeded(message);
            }
            Err(message) => self.status = SubmitStatus::Failed(message),
        }
    }
}

#[derive(Default)]
pub struct ContactForm {
    pub form: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }
}
