//! HTTP clients for the backend API.

pub mod contact_client;
pub mod project_store;
