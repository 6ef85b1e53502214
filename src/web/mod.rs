pub mod api;
pub mod state;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::web::state::AppState;

/// 路由定义
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/atom/*path", get(api::media::handler))
        .nest(
            "/library",
            Router::new()
                .route("/items", get(api::library::list_handler))
                .route("/item", get(api::library::item_handler)),
        )
        .nest(
            "/shell",
            Router::new()
                .route("/open", post(api::shell::open_handler))
                .route("/delete", post(api::shell::delete_handler)),
        )
        .nest(
            "/windows",
            Router::new()
                .route("/list", get(api::windows::list_handler))
                .route("/open", post(api::windows::open_handler))
                .route("/:id/close", post(api::windows::close_handler))
                .route("/:id/focus", post(api::windows::focus_handler))
                .route("/:id/fullscreen", post(api::windows::fullscreen_handler)),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
