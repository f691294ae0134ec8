// POST /auth/signup, POST /auth/login, GET /auth/whoami
use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::database::models::PublicUser;
use crate::database::{users, AppState};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::auth_service::{self, AuthError, AuthResponse, LoginRequest, SignupRequest};

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = auth_service::signup(&state.pool, &state.config.jwt_secret, req)
        .await
        .map_err(into_api_error)?;
    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = auth_service::login(&state.pool, &state.config.jwt_secret, req)
        .await
        .map_err(into_api_error)?;
    Ok(Json(response))
}

/// Current authenticated user's profile. The token subject is looked up
/// fresh, so a token for a since-removed user is refused here.
pub async fn whoami(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let user = users::get_user_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("unknown user"))?;
    Ok(Json(json!({ "user": PublicUser::from(user) })))
}

fn into_api_error(err: AuthError) -> ApiError {
    match err {
        AuthError::Rejected(msg) => ApiError::bad_request(msg),
        AuthError::Database(e) => e.into(),
        AuthError::Token(e) => ApiError::internal_server_error(e.to_string()),
        AuthError::Hash(e) => ApiError::internal_server_error(e.to_string()),
    }
}
