//! Router configuration and server setup.

use axum::{extract::State, http::Uri, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::db;
use crate::error::{ApiError, BootstrapError};
use crate::state::AppState;

/// Creates the router: permissive CORS, health route, JSON 404 fallback.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.config.uptime_seconds(),
    }))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Connects to the database, then binds and serves. A failed connect stops
/// the server before it ever listens.
pub async fn serve(config: ServerConfig) -> Result<(), BootstrapError> {
    let conn = db::connect(&config.db_path)?;
    let addr = config.bind_address();
    let state = AppState::new(config, conn);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("server listening on {}", addr);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use tempfile::{tempdir, TempDir};

    // The TempDir keeps the database file alive for the test's duration.
    fn make_test_state() -> (AppState, TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let conn = db::connect(&path).unwrap();

        let state = AppState::new(ServerConfig::default().with_db_path(path), conn);
        (state, dir)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (state, _dir) = make_test_state();
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/api/v1/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let (state, _dir) = make_test_state();
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/api/v1/health").await;
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_unknown_route_gets_json_404() {
        let (state, _dir) = make_test_state();
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/api/v1/spaces").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }
}
