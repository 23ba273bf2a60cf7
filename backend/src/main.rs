mod config;
mod mail;
mod services;

use crate::config::AppConfig;
use crate::mail::{MailTransport, SmtpMailer};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::io;
use std::sync::Arc;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

/// The bundled file at `path`, else the SPA shell so that client-side
/// routes survive a reload, else `404` when no bundle was embedded.
fn embedded_response(bundle: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match bundle.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match bundle.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    info!("Starting portfolio server ({})", config.environment);
    config.mail.log_summary();

    let catalog = web::Data::new(services::projects::load_catalog(
        config.projects_file.as_deref(),
    ));
    let mail_config = web::Data::new(config.mail.clone());
    let mailer: Arc<dyn MailTransport> = Arc::new(SmtpMailer::new(config.mail.clone()));
    let mailer = web::Data::from(mailer);

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(mail_config.clone())
            .app_data(mailer.clone())
            .app_data(catalog.clone())
            .service(services::health::configure_routes())
            .service(services::contact::configure_routes())
            .service(services::projects::configure_routes())
            .service(web::scope("/api").default_service(web::to(services::api_not_found)))
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>shell</html>")),
            DirEntry::File(File::new("app.css", b"body{}")),
        ],
    );
    static EMPTY: Dir = Dir::new("", &[]);

    async fn body_of(resp: HttpResponse) -> Vec<u8> {
        to_bytes(resp.into_body()).await.unwrap().to_vec()
    }

    #[actix_web::test]
    async fn serves_bundled_file_with_its_mime_type() {
        let resp = embedded_response(&BUNDLE, "/app.css");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("text/css")
        );
        assert_eq!(body_of(resp).await, b"body{}");
    }

    #[actix_web::test]
    async fn root_and_unknown_paths_get_the_shell() {
        for path in ["/", "/projects/project-1", "/about"] {
            let resp = embedded_response(&BUNDLE, path);
            assert_eq!(resp.status(), 200, "{path}");
            assert_eq!(body_of(resp).await, b"<html>shell</html>");
        }
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let resp = embedded_response(&EMPTY, "/anything");
        assert_eq!(resp.status(), 404);
    }
}
