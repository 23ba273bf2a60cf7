pub mod contact;
pub mod health;
pub mod projects;

use actix_web::HttpResponse;
use common::responses::ApiError;

/// JSON 404 for `/api/...` paths that no service claims.
pub async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new(
        "Not found",
        "The requested API endpoint does not exist",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn unknown_api_path_is_json_404() {
        let app = test::init_service(
            App::new()
                .service(health::configure_routes())
                .service(web::scope("/api").default_service(web::to(api_not_found))),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/unknown").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Not found");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
    }
}
