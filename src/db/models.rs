use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub height: f64,
    pub jersey_number: i32,
    pub current_team: String,
    pub img_url: String,
}

#[derive(Debug, FromRow)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub img_url: String,
}

#[derive(Debug, FromRow)]
pub struct Position {
    pub id: i32,
    pub code: String,
}

#[derive(Debug, FromRow)]
pub struct DailyTarget {
    pub id: i32,
    pub day: NaiveDate,
    pub player_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub user_id: Uuid,
    pub day: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct Guess {
    pub id: Uuid,
    pub game_id: Uuid,
    pub player_id: i32,
    pub number: i32,
    pub created_at: DateTime<Utc>,
}
