//! Signup and login orchestration over the credential, token, and user
//! query layers.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::{self, password, TokenError};
use crate::database::models::PublicUser;
use crate::database::users;

/// A stored attempt counter above this refuses further logins until reset.
const MAX_LOGIN_ATTEMPTS: i32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Client-facing rejection with one of the fixed flow messages.
    #[error("{0}")]
    Rejected(&'static str),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Hash(#[from] password::PasswordError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

/// Hash the supplied password, insert the user, and issue a token for the
/// new id. An insert that returns no row is rejected without telling the
/// client whether the username was taken.
pub async fn signup(
    pool: &PgPool,
    secret: &str,
    req: SignupRequest,
) -> Result<AuthResponse, AuthError> {
    let (username, plaintext) = match (req.username.as_deref(), req.password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(AuthError::Rejected("username and password are required")),
    };

    let digest = password::hash(plaintext)?;

    let inserted = users::create_user(
        pool,
        username,
        &digest,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )
    .await;

    let user = match inserted {
        Ok(Some(user)) => user,
        // Zero rows and unique-constraint conflicts collapse into the same
        // client-facing rejection.
        Ok(None) | Err(sqlx::Error::Database(_)) => {
            return Err(AuthError::Rejected("unable to sign up user"))
        }
        Err(e) => return Err(e.into()),
    };

    let token = auth::issue(user.user_id, secret)?;
    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}

/// Login state machine. The lockout check runs before password
/// verification, so a locked account never reveals whether the supplied
/// password was correct, and a refused attempt writes nothing.
pub async fn login(pool: &PgPool, secret: &str, req: LoginRequest) -> Result<AuthResponse, AuthError> {
    let (username, plaintext) = match (req.username.as_deref(), req.password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(AuthError::Rejected("username and password are required")),
    };

    let user = users::get_user_by_username(pool, username)
        .await?
        .ok_or(AuthError::Rejected("invalid username"))?;

    if user.login_attempts > MAX_LOGIN_ATTEMPTS {
        return Err(AuthError::Rejected("too many login attempts"));
    }

    if !password::verify(plaintext, &user.password_hash) {
        users::increment_login_attempts(pool, user.user_id).await?;
        return Err(AuthError::Rejected("invalid credentials"));
    }

    users::reset_login_attempts(pool, user.user_id).await?;

    let token = auth::issue(user.user_id, secret)?;
    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}
