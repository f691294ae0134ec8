use coffee_addiction_api::config::AppConfig;
use coffee_addiction_api::database::AppState;
use coffee_addiction_api::{app, docs};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let port = config.port;
    let docs_path = config.docs_path.clone();

    let state = match AppState::connect(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = state.migrate().await {
        tracing::error!("migration failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = docs::write_openapi(&docs_path, port) {
        tracing::error!("failed to write {}: {}", docs_path, e);
        std::process::exit(1);
    }

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running on http://{}", bind_addr);
    tracing::info!("OpenAPI document available at http://{}/api-docs", bind_addr);

    let server = axum::serve(listener, app(state.clone()));
    if let Err(e) = server.await {
        tracing::error!("server error: {}", e);
    }

    state.close().await;
}
