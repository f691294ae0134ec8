pub mod auth;
pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::AppState;

/// Build the application router over shared state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(user_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs", get(docs::serve_openapi))
        .route("/beans", get(handlers::beans::list_beans).post(handlers::beans::create_bean))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
}

fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/whoami", get(handlers::auth::whoami))
        .route(
            "/users/beans",
            get(handlers::user_beans::list_user_beans).post(handlers::user_beans::create_user_bean),
        )
        .route("/users/beans/:bean_id", delete(handlers::user_beans::delete_user_bean))
        .layer(from_fn_with_state(state, middleware::bearer_auth_middleware))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
