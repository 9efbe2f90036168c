//! Application Shell
//!
//! Fallback for paths that are not files in the dist directory: the
//! front end's `index.html`, so deep links like `/projects/trex` boot the
//! app. The status reflects whether the front end will render a real page.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::server::state::AppState;

/// GET /* (fallback)
pub async fn app_shell(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let status = if state.has_page(uri.path()) {
        StatusCode::OK
    } else {
        tracing::debug!(path = %uri.path(), "No page for path");
        StatusCode::NOT_FOUND
    };

    (status, Html(state.shell.to_string())).into_response()
}
