use crate::http;
use actix_web::web;

/// Mount the landing page at `/` and every API sub-module under `/api`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    http::landing::init_routes(cfg);
    cfg.service(
        web::scope("/api")
            .configure(http::auth::init_routes)
            .configure(http::play::init_routes)
            .configure(http::health::init_routes),
    );
}
