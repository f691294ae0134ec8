// Authenticated owned-bean handlers under /users/beans
use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::database::{beans, models::NewBean, AppState};
use crate::error::ApiError;
use crate::middleware::AuthUser;

pub async fn list_user_beans(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let beans = beans::list_beans_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(json!({ "beans": beans })))
}

pub async fn create_user_bean(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(args): Json<NewBean>,
) -> Result<Json<Value>, ApiError> {
    let bean = beans::create_user_bean(&state.pool, auth.user_id, &args).await?;
    Ok(Json(json!({ "bean": bean })))
}

/// Deletes the bean only when both the id and the requesting user match.
/// A mismatch deletes nothing and still responds 200; callers that care
/// must re-list to observe the difference.
pub async fn delete_user_bean(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(bean_id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    beans::delete_user_bean(&state.pool, bean_id, auth.user_id).await?;
    Ok(Json(json!({ "deleted": bean_id })))
}
