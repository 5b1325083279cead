//! Password authentication (argon2 + JWT)

use actix_web::{error, post, web, HttpResponse};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::env;
use uuid::Uuid;

use crate::config::settings;
use crate::db::user_repo;

//////////////////////////////////////////////////
// Data structs
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    exp: usize,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

//////////////////////////////////////////////////
// ─────────────  JwtAuth extractor  ─────────────
//////////////////////////////////////////////////

pub mod extractor {
    use super::Claims;
    use actix_web::{
        dev::Payload, error::ErrorUnauthorized, FromRequest, HttpRequest, Result as ActixResult,
    };
    use futures_util::future::{ready, Ready};
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use std::env;
    use uuid::Uuid;

    /// Extracts and validates a Bearer-JWT, exposing the user UUID.
    #[derive(Debug, Clone)]
    pub struct JwtAuth {
        pub user_id: Uuid,
    }

    impl FromRequest for JwtAuth {
        type Error = actix_web::Error;
        type Future = Ready<ActixResult<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| {
                // Expect:  Authorization: Bearer <JWT>
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| ErrorUnauthorized("missing Authorization header"))?;

                let token = hdr
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| ErrorUnauthorized("malformed Authorization header"))?;

                let secret =
                    env::var("JWT_SECRET").map_err(|_| ErrorUnauthorized("server mis-config"))?;
                let data = decode::<Claims>(
                    token,
                    &DecodingKey::from_secret(secret.as_bytes()),
                    &Validation::default(),
                )
                .map_err(|_| ErrorUnauthorized("invalid / expired token"))?;

                let user_id =
                    Uuid::parse_str(&data.claims.sub).map_err(|_| ErrorUnauthorized("bad sub"))?;

                Ok(JwtAuth { user_id })
            })();

            ready(res)
        }
    }
}
pub use extractor::JwtAuth; // <-- makes path crate::http::auth::JwtAuth work

fn issue_token(user_id: Uuid) -> Result<TokenResponse, actix_web::Error> {
    let secret = env::var("JWT_SECRET")
        .map_err(|_| error::ErrorInternalServerError("JWT_SECRET must be set"))?;
    let ttl = Duration::minutes(settings().token_ttl_minutes);
    let exp = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| error::ErrorInternalServerError("token expiry overflow"))?
        .timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };
    let access_token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(error::ErrorInternalServerError)?;

    Ok(TokenResponse {
        access_token,
        expires_in: settings().token_ttl_minutes * 60,
    })
}

//////////////////////////////////////////////////
// POST /api/auth/signup
//////////////////////////////////////////////////
#[post("/auth/signup")]
pub async fn signup(
    info: web::Json<SignupRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let email = info.email.trim();
    if !email.contains('@') {
        return Ok(HttpResponse::BadRequest().body("invalid email address"));
    }
    if info.password.len() < 8 {
        return Ok(HttpResponse::BadRequest().body("password must be at least 8 characters"));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(info.password.as_bytes(), &salt)
        .map_err(error::ErrorInternalServerError)?
        .to_string();

    let user_id = user_repo::create_with_password(&db, email, &hash)
        .await
        .map_err(error::ErrorInternalServerError)?;

    let Some(user_id) = user_id else {
        return Ok(HttpResponse::BadRequest().body("an account with that email already exists"));
    };

    log::info!("new account {email} ({user_id})");
    Ok(HttpResponse::Ok().json(issue_token(user_id)?))
}

//////////////////////////////////////////////////
// POST /api/auth/login
//////////////////////////////////////////////////
#[post("/auth/login")]
pub async fn login(
    info: web::Json<LoginRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let found = user_repo::credentials_by_email(&db, info.email.trim())
        .await
        .map_err(error::ErrorInternalServerError)?;

    let Some((user_id, stored_hash)) = found else {
        return Ok(HttpResponse::Unauthorized().body("unknown email or wrong password"));
    };

    let parsed = PasswordHash::new(&stored_hash).map_err(error::ErrorInternalServerError)?;
    if Argon2::default()
        .verify_password(info.password.as_bytes(), &parsed)
        .is_err()
    {
        return Ok(HttpResponse::Unauthorized().body("unknown email or wrong password"));
    }

    Ok(HttpResponse::Ok().json(issue_token(user_id)?))
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(signup).service(login);
}
