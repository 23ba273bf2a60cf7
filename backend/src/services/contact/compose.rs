use common::html::escape_html;
use common::requests::ContactSubmission;

use crate::config::MailConfiguration;
use crate::mail::OutgoingMessage;

/// Display name on every relayed message.
pub const FROM_NAME: &str = "Portfolio Contact";
/// Prepended to the visitor's subject.
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Builds the email for a validated submission.
///
/// The message is sent from the configured address to the configured
/// recipient with `Reply-To` set to the visitor, so answering from the inbox
/// goes straight back to them. The plain-text part carries the visitor's
/// input verbatim; the HTML part escapes it.
pub fn compose(submission: &ContactSubmission, mail: &MailConfiguration) -> OutgoingMessage {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let subject = submission.subject_or_default();
    let message = submission.message.trim();

    let text_body = format!(
        "Name: {name}\nEmail: {email}\nSubject: {subject}\n\nMessage:\n{message}"
    );

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px; max-width: 600px;">
  <h2 style="color: #6d28d9;">New Contact Form Submission</h2>
  <p><strong>From:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Subject:</strong> {subject}</p>
  <div style="margin-top: 20px; border-left: 4px solid #6d28d9; padding-left: 15px;">
    <h3 style="margin-top: 0;">Message:</h3>
    <p style="white-space: pre-line;">{message}</p>
  </div>
  <p style="margin-top: 30px; font-size: 12px; color: #666;">
    This email was sent from your portfolio contact form.
  </p>
</div>"#,
        name = escape_html(name),
        email = escape_html(email),
        subject = escape_html(subject),
        message = escape_html(message),
    );

    OutgoingMessage {
        from_name: FROM_NAME.to_string(),
        from_address: mail.from.clone(),
        to: mail.to.clone(),
        reply_to: email.to_string(),
        subject: format!("{SUBJECT_PREFIX}{subject}"),
        text_body,
        html_body,
    }
}
