//! Folio Static Host
//!
//! Serves the built front end with Axum. The browser app does all the
//! rendering; the host only hands out files and the application shell.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status with catalog size and uptime
//! - anything else - a file from `dist_dir`, or the shell (`index.html`)
//!   with 200 for pages the front end renders and 404 otherwise
//!
//! # Example
//!
//! ```rust,ignore
//! use folio::catalog::Dataset;
//! use folio::config::ServerConfig;
//! use folio::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Dataset::bundled()?, ServerConfig::default())?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shell: MethodRouter = get(routes::shell::app_shell).with_state(Arc::clone(&shared_state));
    let assets = ServeDir::new(&shared_state.config.dist_dir).fallback(shell);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the static host
pub async fn serve(state: AppState) -> ServerResult<()> {
    if let Some(dup) = state.dataset.duplicate_ids().first() {
        tracing::warn!(
            id = %dup.id,
            positions = ?dup.positions,
            "Dataset has duplicate ids; detail pages show the first match"
        );
    }

    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Folio listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Folio shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dataset;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const SHELL: &str = "<!DOCTYPE html><html><body>folio shell</body></html>";

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dir.path().join("app.css"), "body { margin: 0; }").unwrap();

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let state = AppState::new(Dataset::bundled().unwrap(), config).unwrap();

        (build_router(state), dir)
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();
        let (status, _) = get_path(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let expected = Dataset::bundled().unwrap().len();
        assert_eq!(json["projects"], expected);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_root_serves_shell() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_client_routes_serve_shell() {
        for path in ["/about", "/projects", "/projects/trex"] {
            let (app, _dir) = create_test_app();
            let (status, body) = get_path(app, path).await;
            assert_eq!(status, StatusCode::OK, "path {}", path);
            assert_eq!(body, SHELL);
        }
    }

    #[tokio::test]
    async fn test_unknown_project_is_not_found() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/projects/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/contact").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, SHELL);
    }
}
