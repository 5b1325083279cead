//! Daily mystery-player selection.

use anyhow::Context;
use chrono::NaiveDate;
use rand::Rng;
use sqlx::PgPool;

use crate::cache;
use crate::db::{catalog_repo, models::DailyTarget, target_repo};

/// Return the mystery player for `day`, designating one if none exists yet.
///
/// The pick is a uniformly random entry of the id list; an empty catalogue
/// is an error and is not retried. Creation is a conditional insert against
/// the UNIQUE day column, so when two first-of-day requests race, both end
/// up returning the same row.
pub async fn ensure_daily_target(db: &PgPool, day: NaiveDate) -> anyhow::Result<DailyTarget> {
    if let Some(target) = target_repo::find_for_day(db, day).await? {
        return Ok(target);
    }

    let ids = candidate_ids(db).await?;
    anyhow::ensure!(!ids.is_empty(), "player catalogue is empty");

    let pick = ids[rand::rng().random_range(0..ids.len())];
    let created = target_repo::create_for_day(db, day, pick).await?;
    if created {
        log::info!("player {pick} designated as target for {day}");
    }

    target_repo::find_for_day(db, day)
        .await?
        .context("daily target missing after insert")
}

/// Player ids eligible for the pick, cache-first.
async fn candidate_ids(db: &PgPool) -> anyhow::Result<Vec<i32>> {
    let cached: Vec<i32> = cache::PLAYERS.iter().map(|e| *e.key()).collect();
    if !cached.is_empty() {
        return Ok(cached);
    }
    catalog_repo::player_ids(db).await
}
