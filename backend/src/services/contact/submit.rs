//! # Contact Submission Handler
//!
//! Backend logic for `POST /api/contact`.
//!
//! ## Workflow
//!
//! 1.  **Required fields**: name, email and message must be non-blank.
//!     Otherwise `400 Missing required fields`.
//! 2.  **Honeypot**: a filled `website` field ends the request with the normal
//!     success answer and no email.
//! 3.  **Email shape**: the sender address must match the basic pattern and
//!     parse as a mailbox address, since it becomes the `Reply-To`.
//!     Otherwise `400 Invalid email address`.
//! 4.  **Configuration**: without a usable SMTP credential the message is
//!     acknowledged with `debug: true` and dropped.
//! 5.  **Connectivity**: `MailTransport::verify_connectivity`. A failure is a
//!     `500` configuration error naming the operator's address.
//! 6.  **Send**: exactly one `MailTransport::send`. A failure is a `500`
//!     delivery error naming the operator's address.
//!
//! There are no retries. Each request gets a UUID that prefixes its log lines.

use actix_web::{web, HttpResponse};
use common::requests::ContactSubmission;
use log::{error, info, warn};
use uuid::Uuid;

use super::compose::compose;
use super::outcome::{BadRequest, ContactOutcome};
use crate::config::MailConfiguration;
use crate::mail::{is_deliverable_address, MailTransport};

/// Actix web handler for `POST /api/contact`.
pub(crate) async fn process(
    payload: web::Json<ContactSubmission>,
    mail_config: web::Data<MailConfiguration>,
    mailer: web::Data<dyn MailTransport>,
) -> HttpResponse {
    let outcome = handle_submission(&payload, &mail_config, mailer.get_ref()).await;
    outcome.into_response(mail_config.fallback_contact())
}

/// Runs one submission through the decision sequence described in the module docs.
pub async fn handle_submission(
    submission: &ContactSubmission,
    mail: &MailConfiguration,
    transport: &dyn MailTransport,
) -> ContactOutcome {
    let request_id = Uuid::new_v4();

    if submission.missing_required() {
        warn!("[{request_id}] Contact submission rejected: missing required fields");
        return ContactOutcome::RejectedBadRequest(BadRequest::MissingFields);
    }

    if submission.is_honeypot_filled() {
        info!("[{request_id}] Honeypot field filled, discarding submission");
        return ContactOutcome::AcceptedSilently;
    }

    if !submission.has_valid_email() || !is_deliverable_address(&submission.email) {
        warn!("[{request_id}] Contact submission rejected: invalid email address");
        return ContactOutcome::RejectedBadRequest(BadRequest::InvalidEmail);
    }

    info!(
        "[{request_id}] Contact submission from {} <{}>",
        submission.name.trim(),
        submission.email.trim()
    );

    if !mail.is_complete() {
        warn!(
            "[{request_id}] Email configuration is incomplete: SMTP_PASSWORD is missing or still the placeholder; message not sent"
        );
        return ContactOutcome::AcceptedDegraded;
    }

    if let Err(e) = transport.verify_connectivity().await {
        error!("[{request_id}] SMTP verification failed: {e}");
        return ContactOutcome::RejectedConfigError;
    }
    info!("[{request_id}] SMTP connection verified");

    match transport.send(compose(submission, mail)).await {
        Ok(server_reply) => {
            info!("[{request_id}] Email sent: {server_reply}");
            ContactOutcome::Accepted
        }
        Err(e) => {
            error!("[{request_id}] Error sending email: {e}");
            ContactOutcome::RejectedDeliveryError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER_PASSWORD;
    use crate::mail::testing::RecordingTransport;
    use std::time::Duration;

    fn mail(password: Option<&str>) -> MailConfiguration {
        MailConfiguration {
            host: "smtp.test".to_string(),
            port: 465,
            secure: true,
            user: "me@site.dev".to_string(),
            password: password.map(str::to_string),
            from: "me@site.dev".to_string(),
            to: "me@site.dev".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn missing_fields_never_reach_the_transport() {
        let transport = RecordingTransport::healthy();
        let config = mail(Some("secret"));

        for s in [
            submission("", "jane@x.com", "Hi"),
            submission("Jane", "", "Hi"),
            submission("Jane", "jane@x.com", ""),
            submission("   ", "jane@x.com", "Hi"),
        ] {
            let outcome = handle_submission(&s, &config, &transport).await;
            assert_eq!(
                outcome,
                ContactOutcome::RejectedBadRequest(BadRequest::MissingFields)
            );
        }
        assert_eq!(transport.verify_calls(), 0);
        assert!(transport.sent().is_empty());
    }

    #[actix_web::test]
    async fn honeypot_is_accepted_without_side_effects() {
        let transport = RecordingTransport::healthy();
        let mut s = submission("Bot", "bot@x.com", "Buy now");
        s.honeypot = Some("http://spam.example".to_string());

        let outcome = handle_submission(&s, &mail(Some("secret")), &transport).await;

        assert_eq!(outcome, ContactOutcome::AcceptedSilently);
        assert_eq!(transport.verify_calls(), 0);
        assert!(transport.sent().is_empty());
    }

    #[actix_web::test]
    async fn invalid_email_is_rejected() {
        let transport = RecordingTransport::healthy();
        let outcome = handle_submission(
            &submission("Jane", "jane-at-x", "Hi"),
            &mail(Some("secret")),
            &transport,
        )
        .await;

        assert_eq!(
            outcome,
            ContactOutcome::RejectedBadRequest(BadRequest::InvalidEmail)
        );
        assert!(transport.sent().is_empty());
    }

    #[actix_web::test]
    async fn incomplete_configuration_degrades() {
        for password in [None, Some(""), Some(PLACEHOLDER_PASSWORD)] {
            let transport = RecordingTransport::healthy();
            let outcome = handle_submission(
                &submission("Jane", "jane@x.com", "Hi"),
                &mail(password),
                &transport,
            )
            .await;

            assert_eq!(outcome, ContactOutcome::AcceptedDegraded);
            assert_eq!(transport.verify_calls(), 0);
            assert!(transport.sent().is_empty());
        }
    }

    #[actix_web::test]
    async fn healthy_transport_sends_exactly_once() {
        let transport = RecordingTransport::healthy();
        let outcome = handle_submission(
            &submission("Jane", "jane@x.com", "Hi"),
            &mail(Some("secret")),
            &transport,
        )
        .await;

        assert_eq!(outcome, ContactOutcome::Accepted);
        assert_eq!(transport.verify_calls(), 1);
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "jane@x.com");
        assert_eq!(sent[0].to, "me@site.dev");
    }

    #[actix_web::test]
    async fn failed_verification_skips_send() {
        let transport = RecordingTransport::unreachable("535 authentication failed");
        let outcome = handle_submission(
            &submission("Jane", "jane@x.com", "Hi"),
            &mail(Some("wrong")),
            &transport,
        )
        .await;

        assert_eq!(outcome, ContactOutcome::RejectedConfigError);
        assert_eq!(transport.verify_calls(), 1);
        assert!(transport.sent().is_empty());
    }

    #[actix_web::test]
    async fn failed_send_is_delivery_error() {
        let transport = RecordingTransport::failing_send("452 insufficient storage");
        let outcome = handle_submission(
            &submission("Jane", "jane@x.com", "Hi"),
            &mail(Some("secret")),
            &transport,
        )
        .await;

        assert_eq!(outcome, ContactOutcome::RejectedDeliveryError);
        assert_eq!(transport.sent().len(), 1);
    }

    #[actix_web::test]
    async fn unparseable_reply_to_is_invalid_email_before_any_session() {
        for email in ["a,b@x.com", "a<b@x.com"] {
            let transport = RecordingTransport::healthy();
            let outcome = handle_submission(
                &submission("Jane", email, "Hi"),
                &mail(Some("secret")),
                &transport,
            )
            .await;

            assert_eq!(
                outcome,
                ContactOutcome::RejectedBadRequest(BadRequest::InvalidEmail)
            );
            assert_eq!(transport.verify_calls(), 0);
            assert!(transport.sent().is_empty());
        }
    }
}
