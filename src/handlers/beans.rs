// Public catalog handlers: GET /beans and POST /beans
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database::{beans, models::NewBean, AppState};
use crate::error::ApiError;

pub async fn list_beans(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let beans = beans::list_beans(&state.pool).await?;
    Ok(Json(json!({ "beans": beans })))
}

pub async fn create_bean(
    State(state): State<AppState>,
    Json(args): Json<NewBean>,
) -> Result<Json<Value>, ApiError> {
    let bean = beans::create_bean(&state.pool, &args).await?;
    Ok(Json(json!({ "bean": bean })))
}
