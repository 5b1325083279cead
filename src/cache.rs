//! Warm in-memory copy of the player catalogue.
//!
//! The catalogue is immutable for the season and every page load needs the
//! full name list for autocomplete, so it is loaded once at start-up and
//! served from memory instead of hitting Postgres on each request.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use sqlx::PgPool;

/// Autocomplete entry for one player.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlayerName {
    pub id: i32,
    pub name: String,
    pub img_url: String,
}

/// Global map id → PlayerName (read-only once warmed).
pub static PLAYERS: Lazy<DashMap<i32, PlayerName>> = Lazy::new(DashMap::new);

/// Fetch the `players` table and populate [`PLAYERS`]. Idempotent.
pub async fn warm_players(db: &PgPool) -> anyhow::Result<()> {
    let rows = sqlx::query_as::<_, (i32, String, String)>(
        "SELECT id, name, img_url FROM players ORDER BY id",
    )
    .fetch_all(db)
    .await?;

    for (id, name, img_url) in rows {
        PLAYERS.insert(id, PlayerName { id, name, img_url });
    }
    Ok(())
}

/// Snapshot of every cached player, sorted by id.
pub fn all_players() -> Vec<PlayerName> {
    let mut out: Vec<PlayerName> = PLAYERS.iter().map(|e| e.value().clone()).collect();
    out.sort_by_key(|p| p.id);
    out
}

/// Warm every in-memory cache we have (called once at startup).
pub async fn warm_all(db: &PgPool) {
    if let Err(e) = warm_players(db).await {
        log::warn!("cache warm-up failed: {e:?}");
    }
}
