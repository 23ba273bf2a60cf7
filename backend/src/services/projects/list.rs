use actix_web::{web, HttpResponse};
use common::catalog::ProjectCatalog;

/// `GET /api/projects`
pub(crate) async fn all(catalog: web::Data<ProjectCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.all())
}

/// `GET /api/projects/featured`
pub(crate) async fn featured(catalog: web::Data<ProjectCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.featured())
}
