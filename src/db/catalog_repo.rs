//! Read-only queries against the seeded player/team/position catalogue.

use anyhow::Context;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::cache::PlayerName;

/// Every player name in the catalogue, for autocomplete and the name
/// fallback on guess submission.
pub async fn player_names(db: &PgPool) -> anyhow::Result<Vec<PlayerName>> {
    let rows = sqlx::query_as::<_, (i32, String, String)>(
        "SELECT id, name, img_url FROM players ORDER BY id",
    )
    .fetch_all(db)
    .await
    .context("fetching player names")?;

    Ok(rows
        .into_iter()
        .map(|(id, name, img_url)| PlayerName { id, name, img_url })
        .collect())
}

/// All player ids, for the daily pick.
pub async fn player_ids(db: &PgPool) -> anyhow::Result<Vec<i32>> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM players ORDER BY id")
        .fetch_all(db)
        .await
        .context("fetching player ids")
}

/// One guess joined with everything the reveal table shows.
///
/// `position` is the player's first listed position code; `team_img_url`
/// is the badge of the affiliated team whose name matches `current_team`
/// (NULL when no affiliation matches, rendered as a badge-less
/// placeholder).
#[derive(Debug, FromRow)]
pub struct GuessRow {
    pub number: i32,
    pub player_id: i32,
    pub player_name: String,
    pub dob: NaiveDate,
    pub height: f64,
    pub jersey_number: i32,
    pub current_team: String,
    pub position: Option<String>,
    pub team_img_url: Option<String>,
}

pub async fn guesses_with_players(db: &PgPool, game_id: uuid::Uuid) -> anyhow::Result<Vec<GuessRow>> {
    sqlx::query_as::<_, GuessRow>(
        r#"
        SELECT
            gu.number          AS number,
            p.id               AS player_id,
            p.name             AS player_name,
            p.dob              AS dob,
            p.height           AS height,
            p.jersey_number    AS jersey_number,
            p.current_team     AS current_team,
            (SELECT po.code
               FROM positions po
               JOIN player_positions pp ON pp.position_id = po.id
              WHERE pp.player_id = p.id
              ORDER BY pp.position_id
              LIMIT 1)         AS position,
            (SELECT t.img_url
               FROM teams t
               JOIN player_teams pt ON pt.team_id = t.id
              WHERE pt.player_id = p.id AND t.name = p.current_team
              LIMIT 1)         AS team_img_url
        FROM guesses gu
        JOIN players p ON p.id = gu.player_id
        WHERE gu.game_id = $1
        ORDER BY gu.number DESC
        "#,
    )
    .bind(game_id)
    .fetch_all(db)
    .await
    .context("fetching guesses for game")
}
