//! Per-user, per-day guessing session.
//!
//! `record_guess` is the only write path. It runs in one transaction:
//! find-or-create the day's game, read the highest guess number, refuse
//! once the cap is reached, append the next number. The upsert row-locks
//! the game for the rest of the transaction, so a double-submit from the
//! same user serializes instead of creating duplicate games or numbers.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings;

#[derive(Debug)]
pub struct RecordedGuess {
    pub game_id: Uuid,
    pub number: i32,
}

#[derive(Debug)]
pub enum SessionError {
    /// The session already holds the maximum number of guesses.
    OutOfGuesses,
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for SessionError {
    fn from(e: sqlx::Error) -> Self {
        SessionError::Storage(e)
    }
}

/// Next guess number, or `None` once `highest` has reached the cap.
/// Numbers are contiguous starting at 1.
pub fn next_number(highest: i32, cap: u32) -> Option<i32> {
    if highest >= cap as i32 {
        None
    } else {
        Some(highest + 1)
    }
}

pub async fn record_guess(
    db: &PgPool,
    user_id: Uuid,
    player_id: i32,
    day: NaiveDate,
) -> Result<RecordedGuess, SessionError> {
    let mut tx = db.begin().await?;

    // Find-or-create under the UNIQUE (user_id, day) constraint. The no-op
    // DO UPDATE makes RETURNING yield the row on conflict as well.
    let game_id: Uuid = sqlx::query_scalar(
        "INSERT INTO games (user_id, day) VALUES ($1, $2)
         ON CONFLICT (user_id, day) DO UPDATE SET user_id = EXCLUDED.user_id
         RETURNING id",
    )
    .bind(user_id)
    .bind(day)
    .fetch_one(&mut *tx)
    .await?;

    let highest: i32 =
        sqlx::query_scalar("SELECT COALESCE(MAX(number), 0) FROM guesses WHERE game_id = $1")
            .bind(game_id)
            .fetch_one(&mut *tx)
            .await?;

    let Some(number) = next_number(highest, settings().max_guesses) else {
        tx.rollback().await.ok();
        return Err(SessionError::OutOfGuesses);
    };

    // Player existence is enforced by the foreign key here, not checked
    // up front (trusted-id guesses skip the catalogue lookup entirely).
    sqlx::query("INSERT INTO guesses (game_id, player_id, number) VALUES ($1, $2, $3)")
        .bind(game_id)
        .bind(player_id)
        .bind(number)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    log::info!("user {user_id} guessed player {player_id} (guess {number})");
    Ok(RecordedGuess { game_id, number })
}
