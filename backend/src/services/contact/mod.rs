//! # Contact Service Module
//!
//! Relays the portfolio contact form to the site owner's inbox.
//!
//! ## Sub-modules:
//! - `submit`: the `POST` handler and the per-request decision sequence.
//! - `compose`: builds the plain-text and HTML email from a submission.
//! - `outcome`: terminal states of a submission and their HTTP responses.
//!
//! Every response of this scope carries `Access-Control-Allow-Origin: *` so
//! that a separately hosted frontend can post to it.

mod compose;
mod outcome;
mod submit;

use actix_web::http::Method;
use actix_web::web::{method, post, resource, scope, to, JsonConfig};
use actix_web::{error, HttpResponse, Scope};
use log::warn;

use outcome::{BadRequest, ContactOutcome};

/// The base path for the contact endpoint.
const API_PATH: &str = "/api/contact";

/// Largest accepted submission body.
const MAX_PAYLOAD_BYTES: usize = 64 * 1024;

/// Configures and returns the Actix `Scope` for the contact endpoint.
///
/// # Registered Routes:
///
/// *   **`POST /api/contact`**: `submit::process`. Expects a `ContactSubmission`
///     JSON body. Requires `web::Data<MailConfiguration>` and
///     `web::Data<dyn MailTransport>` in the application data.
/// *   **`OPTIONS /api/contact`**: CORS preflight, always `200`.
/// *   Any other method: `405` with a JSON error body.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(json_config())
        .service(
            resource("")
                .route(post().to(submit::process))
                .route(method(Method::OPTIONS).to(preflight))
                .default_service(to(method_not_allowed)),
        )
        .default_service(to(super::api_not_found))
}

/// Maps body decoding failures to the same JSON error shape as every other rejection.
fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            warn!("Rejected contact payload: {}", err);
            let response =
                ContactOutcome::RejectedBadRequest(BadRequest::MalformedBody).into_response("");
            error::InternalError::from_response(err, response).into()
        })
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(outcome::ALLOW_ANY_ORIGIN)
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .finish()
}

async fn method_not_allowed() -> HttpResponse {
    ContactOutcome::RejectedMethodNotAllowed.into_response("")
}
