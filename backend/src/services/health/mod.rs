use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use common::responses::HealthStatus;

const API_PATH: &str = "/api/health";

/// `GET /api/health`: always `200 { status: "ok", message }`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_ok() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: HealthStatus = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.message, "Server is running");
    }
}
