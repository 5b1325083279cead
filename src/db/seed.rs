//! One-shot catalogue seeding from a static JSON file.
//!
//! The application treats players, teams and positions as read-only, so
//! everything here runs offline (see `src/bin/seed.rs`) and is idempotent:
//! rerunning against an already-seeded database inserts nothing.

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;

/// Outfield and keeper position codes, as scraped.
pub const ALL_POSITIONS: [&str; 17] = [
    "GK", "LWB", "LB", "CB", "RB", "RWB", "CDM", "CM", "LM", "RM", "CAM", "LW", "LF", "CF", "RF",
    "RW", "ST",
];

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub teams: Vec<SeedTeam>,
    pub players: Vec<SeedPlayer>,
}

#[derive(Debug, Deserialize)]
pub struct SeedTeam {
    pub name: String,
    #[serde(default)]
    pub img_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedPlayer {
    pub name: String,
    pub dob: NaiveDate,
    pub height: f64,
    pub jersey_number: i32,
    pub current_team: String,
    #[serde(default)]
    pub img_url: String,
    pub positions: Vec<String>,
    pub teams: Vec<String>,
}

pub fn parse(raw: &str) -> anyhow::Result<SeedFile> {
    serde_json::from_str(raw).context("parsing seed data")
}

pub async fn seed_catalog(db: &PgPool, data: &SeedFile) -> anyhow::Result<()> {
    for code in ALL_POSITIONS {
        sqlx::query("INSERT INTO positions (code) VALUES ($1) ON CONFLICT (code) DO NOTHING")
            .bind(code)
            .execute(db)
            .await
            .context("inserting position")?;
    }

    for team in &data.teams {
        sqlx::query("INSERT INTO teams (name, img_url) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING")
            .bind(&team.name)
            .bind(&team.img_url)
            .execute(db)
            .await
            .with_context(|| format!("inserting team {}", team.name))?;
    }

    for player in &data.players {
        let player_id: i32 = sqlx::query_scalar(
            "INSERT INTO players (name, dob, height, jersey_number, current_team, img_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(&player.name)
        .bind(player.dob)
        .bind(player.height)
        .bind(player.jersey_number)
        .bind(&player.current_team)
        .bind(&player.img_url)
        .fetch_one(db)
        .await
        .with_context(|| format!("inserting player {}", player.name))?;

        for code in &player.positions {
            sqlx::query(
                "INSERT INTO player_positions (player_id, position_id)
                 SELECT $1, id FROM positions WHERE code = $2
                 ON CONFLICT DO NOTHING",
            )
            .bind(player_id)
            .bind(code)
            .execute(db)
            .await
            .with_context(|| format!("linking {} to position {code}", player.name))?;
        }

        for team_name in &player.teams {
            sqlx::query(
                "INSERT INTO player_teams (player_id, team_id)
                 SELECT $1, id FROM teams WHERE name = $2
                 ON CONFLICT DO NOTHING",
            )
            .bind(player_id)
            .bind(team_name)
            .execute(db)
            .await
            .with_context(|| format!("linking {} to team {team_name}", player.name))?;
        }
    }

    Ok(())
}

/// Create the bootstrap login if it does not exist yet.
pub async fn seed_user(db: &PgPool, email: &str, password_hash: &str) -> anyhow::Result<()> {
    match crate::db::user_repo::create_with_password(db, email, password_hash).await? {
        Some(_) => log::info!("bootstrap user {email} created"),
        None => log::info!("bootstrap user {email} already present"),
    }
    Ok(())
}
