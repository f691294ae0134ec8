//! User queries, including the login-attempt counter mutations.

use sqlx::PgPool;

use crate::database::models::User;

const USER_COLUMNS: &str =
    "user_id, username, password_hash, login_attempts, first_name, last_name, created_at";

pub async fn get_user_by_id(pool: &PgPool, user_id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {} FROM users WHERE user_id = $1",
        USER_COLUMNS
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {} FROM users WHERE username = $1",
        USER_COLUMNS
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Insert a new user; the attempt counter starts at its column default of 0.
/// A username conflict surfaces as the store's constraint violation.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO users (username, password_hash, first_name, last_name) \
         VALUES ($1, $2, $3, $4) \
         RETURNING {}",
        USER_COLUMNS
    ))
    .bind(username)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .fetch_optional(pool)
    .await
}

/// Unconditional single-statement increment. Atomic at the statement level
/// only; the surrounding login sequence is not one transaction.
pub async fn increment_login_attempts(pool: &PgPool, user_id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET login_attempts = login_attempts + 1 WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn reset_login_attempts(pool: &PgPool, user_id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET login_attempts = 0 WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
