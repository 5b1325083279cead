//! Game-lifecycle tests against a live Postgres.
//!
//! Ignored by default; run with a configured database:
//!
//!   DATABASE_URL=postgres://.. cargo test -- --ignored

use chrono::NaiveDate;
use dotenvy::dotenv;
use plwordle_server::db::{game_repo, target_repo, user_repo};
use plwordle_server::game::session::{self, SessionError};
use plwordle_server::game::target;
use sqlx::PgPool;
use uuid::Uuid;

async fn test_pool() -> PgPool {
    dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env for tests");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("DB connection failed");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");
    pool
}

async fn fresh_user(pool: &PgPool) -> Uuid {
    let email = format!("{}@test.local", Uuid::new_v4());
    user_repo::create_with_password(pool, &email, "not-a-real-hash")
        .await
        .expect("signup insert")
        .expect("email is unique")
}

/// Insert a throwaway player with a fixed negative id so reruns collide
/// with nothing seeded.
async fn test_player(pool: &PgPool, id: i32) -> i32 {
    sqlx::query(
        "INSERT INTO players (id, name, dob, height, jersey_number, current_team)
         VALUES ($1, $2, '1995-06-01', 180.0, 10, 'Test Town FC')
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(id)
    .bind(format!("Test Player {id}"))
    .execute(pool)
    .await
    .expect("insert test player");
    id
}

async fn cleanup_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM games WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete games");
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

#[tokio::test]
#[ignore]
async fn first_guess_creates_one_game_numbered_one() {
    let pool = test_pool().await;
    let user = fresh_user(&pool).await;
    let player = test_player(&pool, -101).await;
    let day = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();

    assert!(game_repo::current_game(&pool, user, day)
        .await
        .expect("lookup")
        .is_none());

    let rec = session::record_guess(&pool, user, player, day)
        .await
        .expect("first guess");
    assert_eq!(rec.number, 1);

    let game = game_repo::current_game(&pool, user, day)
        .await
        .expect("lookup")
        .expect("game now exists");
    assert_eq!(game.id, rec.game_id);
    assert_eq!(game_repo::guess_count(&pool, game.id).await.expect("count"), 1);

    cleanup_user(&pool, user).await;
}

#[tokio::test]
#[ignore]
async fn guesses_stay_contiguous_and_cap_at_eight() {
    let pool = test_pool().await;
    let user = fresh_user(&pool).await;
    let player = test_player(&pool, -102).await;
    let day = NaiveDate::from_ymd_opt(1999, 1, 2).unwrap();

    for expected in 1..=8 {
        let rec = session::record_guess(&pool, user, player, day)
            .await
            .expect("guess under cap");
        assert_eq!(rec.number, expected);
    }

    match session::record_guess(&pool, user, player, day).await {
        Err(SessionError::OutOfGuesses) => {}
        other => panic!("ninth guess should be refused, got {other:?}"),
    }

    let game = game_repo::current_game(&pool, user, day)
        .await
        .expect("lookup")
        .expect("game exists");
    assert_eq!(game_repo::guess_count(&pool, game.id).await.expect("count"), 8);

    cleanup_user(&pool, user).await;
}

#[tokio::test]
#[ignore]
async fn daily_target_is_created_once() {
    let pool = test_pool().await;
    test_player(&pool, -103).await;
    let day = NaiveDate::from_ymd_opt(1999, 1, 3).unwrap();

    // Start from a clean slate for this synthetic day.
    sqlx::query("DELETE FROM daily_targets WHERE day = $1")
        .bind(day)
        .execute(&pool)
        .await
        .expect("reset day");

    // Concurrent first-of-day requests converge on one row.
    let (a, b) = tokio::join!(
        target::ensure_daily_target(&pool, day),
        target::ensure_daily_target(&pool, day),
    );
    let a = a.expect("first caller");
    let b = b.expect("second caller");
    assert_eq!(a.id, b.id);
    assert_eq!(a.player_id, b.player_id);

    // And later calls keep returning it.
    let again = target::ensure_daily_target(&pool, day)
        .await
        .expect("repeat call");
    assert_eq!(again.id, a.id);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM daily_targets WHERE day = $1")
        .bind(day)
        .fetch_one(&pool)
        .await
        .expect("count targets");
    assert_eq!(rows, 1);

    let existing = target_repo::find_for_day(&pool, day)
        .await
        .expect("lookup")
        .expect("row present");
    assert_eq!(existing.id, a.id);

    sqlx::query("DELETE FROM daily_targets WHERE day = $1")
        .bind(day)
        .execute(&pool)
        .await
        .expect("cleanup day");
}
