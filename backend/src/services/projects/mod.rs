//! # Project Service Module
//!
//! Read-only JSON API over the server's `ProjectCatalog`, the data source the
//! frontend's project store asks first.
//!
//! ## Sub-modules:
//! - `list`: the full listing and the featured subset.
//! - `get`: a single record by id.
//! - `load`: builds the catalog at startup from `PROJECTS_FILE` or the embedded set.

mod get;
mod list;
mod load;

use actix_web::web::{get, scope, to};
use actix_web::Scope;

use super::api_not_found;

pub use load::load_catalog;

/// The base path for all project endpoints.
const API_PATH: &str = "/api/projects";

/// Configures and returns the Actix `Scope` for the project routes.
///
/// Requires `web::Data<ProjectCatalog>` in the application data.
///
/// # Registered Routes:
///
/// *   **`GET /api/projects`**: every record, in catalog order.
/// *   **`GET /api/projects/featured`**: records with `featured = true`.
/// *   **`GET /api/projects/{project_id}`**: one record, `404` when unknown.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::all))
        .route("/featured", get().to(list::featured))
        .route("/{project_id}", get().to(get::process))
        .default_service(to(api_not_found))
}
