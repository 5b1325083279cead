//! Public landing route.

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::http::auth::JwtAuth;

/// GET / — anonymous callers get the signup/login endpoints, signed-in
/// callers get the play link.
#[get("/")]
pub async fn index(auth: Option<JwtAuth>) -> impl Responder {
    match auth {
        Some(_) => HttpResponse::Ok().json(json!({
            "title": "Premier League Wordle",
            "play": "/api/play",
        })),
        None => HttpResponse::Ok().json(json!({
            "title": "Premier League Wordle",
            "signup": "/api/auth/signup",
            "login": "/api/auth/login",
        })),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
