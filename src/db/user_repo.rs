use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a user plus its credential row. Returns `None` when the email is
/// already taken.
pub async fn create_with_password(
    db: &PgPool,
    email: &str,
    password_hash: &str,
) -> anyhow::Result<Option<Uuid>> {
    let mut tx = db.begin().await.context("opening signup transaction")?;

    let user_id: Option<Uuid> = sqlx::query_scalar(
        "INSERT INTO users (email) VALUES ($1)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(email)
    .fetch_optional(&mut *tx)
    .await
    .context("inserting user")?;

    let Some(user_id) = user_id else {
        tx.rollback().await.ok();
        return Ok(None);
    };

    sqlx::query("INSERT INTO user_credentials (user_id, password_hash) VALUES ($1, $2)")
        .bind(user_id)
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .context("inserting credential")?;

    tx.commit().await.context("committing signup")?;
    Ok(Some(user_id))
}

/// Resolve an email to `(user_id, password_hash)` for login.
pub async fn credentials_by_email(
    db: &PgPool,
    email: &str,
) -> anyhow::Result<Option<(Uuid, String)>> {
    sqlx::query_as::<_, (Uuid, String)>(
        "SELECT u.id, c.password_hash
           FROM users u
           JOIN user_credentials c ON c.user_id = u.id
          WHERE u.email = $1",
    )
    .bind(email)
    .fetch_optional(db)
    .await
    .context("fetching credentials")
}
