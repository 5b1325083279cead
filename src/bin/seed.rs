//! Offline catalogue seeding. Run once against a fresh database:
//!
//!   SEED_DATA=data/pl_data.json cargo run --bin seed

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use plwordle_server::db::seed;
use sqlx::postgres::PgPoolOptions;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let data_path = env::var("SEED_DATA").unwrap_or_else(|_| "data/pl_data.json".into());

    let db_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to create Postgres pool");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    let raw = std::fs::read_to_string(&data_path)?;
    let data = seed::parse(&raw)?;
    seed::seed_catalog(&db_pool, &data).await?;
    log::info!(
        "catalogue seeded: {} teams, {} players",
        data.teams.len(),
        data.players.len()
    );

    // Optional bootstrap login
    if let (Ok(email), Ok(password)) = (env::var("SEED_USER_EMAIL"), env::var("SEED_USER_PASSWORD"))
    {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("hashing bootstrap password: {e}"))?
            .to_string();
        seed::seed_user(&db_pool, &email, &hash).await?;
    }

    Ok(())
}
