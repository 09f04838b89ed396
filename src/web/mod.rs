pub mod handlers;
pub mod models;
pub mod routes;

use actix_cors::Cors;
use actix_web::dev::ServiceRequest;
use log::info;

use crate::model::ModelManager;

// Shared, read-only state handed to every worker
pub struct AppState {
    pub model: ModelManager,
}

/// Cross-origin policy: any origin, method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

pub fn request_line(req: &ServiceRequest) -> String {
    format!("Received {} request for {}", req.method(), req.uri())
}

pub fn log_request(req: &ServiceRequest) {
    info!("{}", request_line(req));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::dev::Service;
    use actix_web::{test, web, App, HttpResponse};
    use std::sync::{Arc, Mutex};

    #[actix_web::test]
    async fn preflight_from_any_origin_is_allowed() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/api/insurance", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/insurance")
            .insert_header((header::ORIGIN, "https://frontend.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[actix_web::test]
    async fn simple_requests_carry_wildcard_origin() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/health", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[actix_web::test]
    async fn preflights_are_answered_before_request_logging() {
        let logged = Arc::new(Mutex::new(Vec::new()));
        let seen = logged.clone();

        // Same layering as the server: logging inside, CORS outermost.
        let app = test::init_service(
            App::new()
                .wrap_fn(move |req, srv| {
                    seen.lock().unwrap().push(request_line(&req));
                    log_request(&req);
                    srv.call(req)
                })
                .wrap(cors())
                .route("/api/insurance", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let preflight = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/insurance")
            .insert_header((header::ORIGIN, "https://frontend.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, preflight).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(logged.lock().unwrap().is_empty());

        let post = test::TestRequest::post()
            .uri("/api/insurance?source=web")
            .insert_header((header::ORIGIN, "https://frontend.example"))
            .to_request();
        let resp = test::call_service(&app, post).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert_eq!(
            *logged.lock().unwrap(),
            vec!["Received POST request for /api/insurance?source=web".to_string()]
        );
    }
}
