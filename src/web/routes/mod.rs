//! Contains all the routes that this application can handle.

pub(super) mod interested;

use std::path::PathBuf;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::services::ServeDir;

use crate::AppState;

pub const INTERESTED_PATH: &str = "/api/interested";

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the method routed server.
/// When `static_dir` is set, any path without a route is looked up in that directory.
pub fn routes(app_state: AppState, static_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route(
            INTERESTED_PATH,
            get(interested::list)
                .post(interested::submit)
                .options(interested::preflight)
                .fallback(interested::method_not_allowed),
        )
        .with_state(app_state)
        .route("/health-check", get(health_check));

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
