use common::requests::ContactSubmission;
use common::responses::ContactReply;
use gloo_console::error;
use gloo_net::http::Request;

use crate::config::{api_url, CONTACT_EMAIL};

const DEFAULT_SUCCESS: &str = "Your message has been sent successfully! I'll get back to you soon.";
const DEFAULT_FAILURE: &str = "An error occurred. Please try again or contact me directly.";

/// Posts the submission to `/contact`.
///
/// `Ok` carries the message to show after a `2xx`, `Err` the message to show
/// for anything else, including network failures.
pub async fn submit(submission: &ContactSubmission) -> Result<String, String> {
    let request = Request::post(&api_url("contact"))
        .json(submission)
        .map_err(|e| {
            error!(format!("Cannot encode contact submission: {e}"));
            network_failure_message()
        })?;

    match request.send().await {
        Ok(response) => {
            let ok = response.ok();
            let reply = response.json::<ContactReply>().await.ok();
            interpret_reply(ok, reply)
        }
        Err(e) => {
            error!(format!("Contact form submission error: {e}"));
            Err(network_failure_message())
        }
    }
}

/// Chooses the user-facing text for a completed HTTP exchange.
pub fn interpret_reply(ok: bool, reply: Option<ContactReply>) -> Result<String, String> {
    let message = reply
        .as_ref()
        .map(ContactReply::message)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string);

    if ok {
        Ok(message.unwrap_or_else(|| DEFAULT_SUCCESS.to_string()))
    } else {
        Err(message.unwrap_or_else(|| DEFAULT_FAILURE.to_string()))
    }
}

pub fn network_failure_message() -> String {
    format!("Network error. Please try again or contact me directly at {CONTACT_EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::responses::{ApiError, ContactAccepted};

    #[test]
    fn success_uses_server_message() {
        let reply = ContactReply::Accepted(ContactAccepted {
            success: true,
            message: "Message received!".to_string(),
            debug: true,
        });
        assert_eq!(
            interpret_reply(true, Some(reply)),
            Ok("Message received!".to_string())
        );
    }

    #[test]
    fn failure_uses_server_message() {
        let reply = ContactReply::Rejected(ApiError::new(
            "Email sending failed",
            "Please try again or contact me directly at me@site.dev",
        ));
        assert_eq!(
            interpret_reply(false, Some(reply)),
            Err("Please try again or contact me directly at me@site.dev".to_string())
        );
    }

    #[test]
    fn missing_body_falls_back_to_defaults() {
        assert_eq!(interpret_reply(true, None), Ok(DEFAULT_SUCCESS.to_string()));
        assert_eq!(interpret_reply(false, None), Err(DEFAULT_FAILURE.to_string()));
    }

    #[test]
    fn network_message_names_contact_address() {
        assert!(network_failure_message().ends_with(CONTACT_EMAIL));
    }
}
