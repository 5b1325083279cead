use anyhow::Context;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Game;

/// The user's session for `day`, if one exists yet. Both the page view and
/// the guess write path key on the same `day` column, so the two can never
/// disagree about which session is current.
pub async fn current_game(db: &PgPool, user_id: Uuid, day: NaiveDate) -> anyhow::Result<Option<Game>> {
    sqlx::query_as::<_, Game>(
        "SELECT id, user_id, day, created_at FROM games WHERE user_id = $1 AND day = $2",
    )
    .bind(user_id)
    .bind(day)
    .fetch_optional(db)
    .await
    .context("fetching current game")
}

pub async fn guess_count(db: &PgPool, game_id: Uuid) -> anyhow::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guesses WHERE game_id = $1")
        .bind(game_id)
        .fetch_one(db)
        .await
        .context("counting guesses")
}
