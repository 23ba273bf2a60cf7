//! Terminal states of a contact submission and the HTTP answer for each.
//!
//! Rejections caused by the mail transport only ever expose a generic text
//! plus the operator's own address; the transport error itself stays in the log.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use common::responses::{ApiError, ContactAccepted};

pub(super) const ALLOW_ANY_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

const SENT_MESSAGE: &str = "Your message has been sent! I will get back to you soon.";
const NOT_CONFIGURED_MESSAGE: &str =
    "Message received! (Note: Email sending is not configured - please set SMTP_PASSWORD)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadRequest {
    MissingFields,
    InvalidEmail,
    MalformedBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Delivered to the SMTP server.
    Accepted,
    /// Honeypot filled. Answered exactly like `Accepted`, nothing sent.
    AcceptedSilently,
    /// No usable credential. Reported as success with the `debug` flag.
    AcceptedDegraded,
    RejectedBadRequest(BadRequest),
    /// Connectivity verification failed.
    RejectedConfigError,
    /// Connectivity was fine but the send failed.
    RejectedDeliveryError,
    RejectedMethodNotAllowed,
}

impl ContactOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactOutcome::Accepted
            | ContactOutcome::AcceptedSilently
            | ContactOutcome::AcceptedDegraded => StatusCode::OK,
            ContactOutcome::RejectedBadRequest(_) => StatusCode::BAD_REQUEST,
            ContactOutcome::RejectedConfigError | ContactOutcome::RejectedDeliveryError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ContactOutcome::RejectedMethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Builds the JSON response. `fallback_contact` is the address offered to
    /// the visitor when relaying fails.
    pub fn into_response(self, fallback_contact: &str) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status());
        builder.insert_header(ALLOW_ANY_ORIGIN);

        match self {
            ContactOutcome::Accepted | ContactOutcome::AcceptedSilently => {
                builder.json(ContactAccepted {
                    success: true,
                    message: SENT_MESSAGE.to_string(),
                    debug: false,
                })
            }
            ContactOutcome::AcceptedDegraded => builder.json(ContactAccepted {
                success: true,
                message: NOT_CONFIGURED_MESSAGE.to_string(),
                debug: true,
            }),
            ContactOutcome::RejectedBadRequest(BadRequest::MissingFields) => builder.json(
                ApiError::new("Missing required fields", "Please fill in all required fields"),
            ),
            ContactOutcome::RejectedBadRequest(BadRequest::InvalidEmail) => builder.json(
                ApiError::new("Invalid email address", "Please provide a valid email address"),
            ),
            ContactOutcome::RejectedBadRequest(BadRequest::MalformedBody) => builder.json(
                ApiError::new("Invalid request body", "The request body must be a JSON object"),
            ),
            ContactOutcome::RejectedConfigError => builder.json(ApiError::new(
                "Email configuration error",
                format!(
                    "There was a problem with the email configuration. Please try contacting me directly at {}",
                    fallback_contact
                ),
            )),
            ContactOutcome::RejectedDeliveryError => builder.json(ApiError::new(
                "Email sending failed",
                format!(
                    "There was a problem sending your message. Please try again or contact me directly at {}",
                    fallback_contact
                ),
            )),
            ContactOutcome::RejectedMethodNotAllowed => builder.json(ApiError::new(
                "Method not allowed",
                "Only POST requests are supported",
            )),
        }
    }
}
