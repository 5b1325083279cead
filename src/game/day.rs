//! The game-day boundary.
//!
//! One boundary — UTC midnight — is used for every read and write. Each
//! game and daily target stores its `day` as a plain DATE computed here,
//! so "which session does this guess belong to" and "which target is
//! current" can never disagree.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// The game day containing `now`.
pub fn game_day(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

/// UTC midnight opening `day`.
pub fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Interpret the client's `today` form field (epoch milliseconds of its
/// local midnight). `None` when out of chrono's representable range.
pub fn from_epoch_millis(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
}
