use actix_web::{web, HttpResponse};
use common::catalog::ProjectCatalog;
use common::responses::ApiError;

/// Actix web handler for `GET /api/projects/{project_id}`.
///
/// # Returns
/// - `200 OK` with the `ProjectRecord` as JSON.
/// - `404 Not Found` with an `ApiError` body when no record has that id.
pub(crate) async fn process(
    project_id: web::Path<String>,
    catalog: web::Data<ProjectCatalog>,
) -> HttpResponse {
    match catalog.get_by_id(&project_id) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::NotFound().json(ApiError::new("Project not found", e.to_string())),
    }
}
