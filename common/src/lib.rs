//! Types shared by the portfolio backend and the Yew frontend.
//!
//! - `model`: the project record shape served by `/api/projects`.
//! - `catalog`: the in-memory project collection and its fallback policy.
//! - `requests`: payloads the frontend sends to the backend.
//! - `responses`: JSON bodies the backend answers with.
//! - `html`: escaping for user text embedded in generated markup.

pub mod catalog;
pub mod html;
pub mod model;
pub mod requests;
pub mod responses;
