use anyhow::Context;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::models::DailyTarget;

pub async fn find_for_day(db: &PgPool, day: NaiveDate) -> anyhow::Result<Option<DailyTarget>> {
    sqlx::query_as::<_, DailyTarget>(
        "SELECT id, day, player_id, created_at FROM daily_targets WHERE day = $1",
    )
    .bind(day)
    .fetch_optional(db)
    .await
    .context("fetching daily target")
}

/// Conditional insert: `day` is UNIQUE, so when two first-of-day requests
/// race, one insert wins and the other sees zero rows affected. Callers
/// re-read afterwards and both converge on the same row.
pub async fn create_for_day(db: &PgPool, day: NaiveDate, player_id: i32) -> anyhow::Result<bool> {
    let res = sqlx::query(
        "INSERT INTO daily_targets (day, player_id) VALUES ($1, $2)
         ON CONFLICT (day) DO NOTHING",
    )
    .bind(day)
    .bind(player_id)
    .execute(db)
    .await
    .context("inserting daily target")?;

    Ok(res.rows_affected() > 0)
}
