pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::catch_panic::CatchPanicLayer;

use crate::registry::ActivityRegistry;

/// Registry handle shared across request handlers.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

/// Builds the full application router around an injected registry, so
/// tests can run against an isolated instance.
pub fn app(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/health", get(routes::health::health_handler))
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
