//! The play page: reveal view and guess submission.

use actix_web::{error, get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;

use crate::cache::{self, PlayerName};
use crate::db::{catalog_repo, game_repo};
use crate::game::{
    day, format,
    session::{self, SessionError},
    target,
    validate::{self, GuessError},
};
use crate::http::auth::JwtAuth;

//////////////////////////////////////////////////
// View DTOs
//////////////////////////////////////////////////

#[derive(Serialize)]
pub struct GuessView {
    pub number: i32,
    pub player: String,
    pub team: format::TeamLabel,
    pub position: String,
    pub age: i32,
    pub jersey: String,
    pub height: String,
    pub correct: bool,
}

#[derive(Serialize)]
pub struct GameView {
    pub date: DateTime<Utc>,
    pub guesses: Vec<GuessView>,
}

#[derive(Serialize)]
pub struct PlayView {
    pub players: Vec<PlayerName>,
    pub game: Option<GameView>,
}

/// Guess submission form. `today` is the client's local midnight in epoch
/// milliseconds; the field names mirror the combobox form on the page.
#[derive(Deserialize)]
pub struct GuessForm {
    #[serde(rename = "guess[id]")]
    pub guess_id: Option<String>,
    #[serde(rename = "guess[name]")]
    pub guess_name: Option<String>,
    pub today: String,
}

/// Catalogue for autocomplete and the name fallback, cache-first.
async fn load_catalog(db: &PgPool) -> Result<Vec<PlayerName>, actix_web::Error> {
    let cached = cache::all_players();
    if !cached.is_empty() {
        return Ok(cached);
    }
    // Rare fallback path before warm-up completes
    catalog_repo::player_names(db)
        .await
        .map_err(error::ErrorInternalServerError)
}

//////////////////////////////////////////////////
// GET /api/play
//////////////////////////////////////////////////
#[get("/play")]
pub async fn play_view(
    auth: JwtAuth,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let now = Utc::now();
    let today = day::game_day(now);

    // Make sure a mystery player exists for today before anything renders.
    let daily = target::ensure_daily_target(&db, today)
        .await
        .map_err(error::ErrorInternalServerError)?;

    let players = load_catalog(&db).await?;

    let game = game_repo::current_game(&db, auth.user_id, today)
        .await
        .map_err(error::ErrorInternalServerError)?;

    let game = match game {
        Some(g) => {
            let rows = catalog_repo::guesses_with_players(&db, g.id)
                .await
                .map_err(error::ErrorInternalServerError)?;
            let guesses = rows
                .into_iter()
                .map(|r| GuessView {
                    number: r.number,
                    player: r.player_name,
                    team: format::team_label(&r.current_team, r.team_img_url),
                    position: r.position.unwrap_or_default(),
                    age: format::age_in_years(r.dob, today),
                    jersey: format::jersey_display(r.jersey_number),
                    height: format::height_display(r.height),
                    correct: r.player_id == daily.player_id,
                })
                .collect();
            Some(GameView {
                date: g.created_at,
                guesses,
            })
        }
        None => None,
    };

    Ok(HttpResponse::Ok().json(PlayView { players, game }))
}

//////////////////////////////////////////////////
// POST /api/play
//////////////////////////////////////////////////
#[post("/play")]
pub async fn submit_guess(
    auth: JwtAuth,
    form: web::Form<GuessForm>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    // The client reports its local midnight; garbage here means the page
    // is in a broken state and a refresh is the only fix.
    let client_midnight: i64 = form.today.parse().map_err(|_| {
        error::ErrorInternalServerError("A server error occurred, please refresh the page")
    })?;

    let now = Utc::now();
    let today = day::game_day(now);
    if let Some(client) = day::from_epoch_millis(client_midnight) {
        if day::game_day(client) != today {
            // Server day is authoritative; just record the disagreement.
            log::warn!(
                "client day {} disagrees with server day {today}",
                day::game_day(client)
            );
        }
    }

    let catalog = load_catalog(&db).await?;
    let player_id = validate::resolve_guess(
        form.guess_id.as_deref(),
        form.guess_name.as_deref(),
        &catalog,
    )
    .map_err(|e| match e {
        GuessError::UnknownPlayer => error::ErrorNotFound("Invalid player guessed"),
    })?;

    match session::record_guess(&db, auth.user_id, player_id, today).await {
        Ok(rec) => Ok(HttpResponse::Ok().json(json!({ "number": rec.number }))),
        Err(SessionError::OutOfGuesses) => {
            Ok(HttpResponse::BadRequest().body("You are out of guesses!"))
        }
        Err(SessionError::Storage(e)) => Err(error::ErrorInternalServerError(e)),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(play_view).service(submit_guess);
}
