use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/insurance", web::post().to(handlers::insurance))
    )
    .route("/health", web::get().to(handlers::health_check));
}
