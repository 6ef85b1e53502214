use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json as AxumJson,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::web::state::AppState;
use crate::web::utils::errors::not_found_json;

#[derive(Deserialize)]
pub struct OpenRequest {
    pub title: Option<String>,
}

/// 窗口列表接口
pub async fn list_handler(State(state): State<Arc<AppState>>) -> AxumJson<serde_json::Value> {
    let windows = state.windows.list().await;
    AxumJson(serde_json::json!({
        "status": "success",
        "count": windows.len(),
        "data": windows
    }))
}

/// 打开窗口接口（新窗口获得焦点）
pub async fn open_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OpenRequest>,
) -> AxumJson<serde_json::Value> {
    let title = payload.title.unwrap_or_else(|| "Mira".to_string());
    let window = state.windows.open(&title).await;
    AxumJson(serde_json::json!({
        "status": "success",
        "data": window
    }))
}

/// 关闭窗口接口
pub async fn close_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if state.windows.close(id).await {
        AxumJson(serde_json::json!({ "status": "success" })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            AxumJson(not_found_json("unknown window id")),
        )
            .into_response()
    }
}

/// 聚焦窗口接口
pub async fn focus_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if state.windows.focus(id).await {
        AxumJson(serde_json::json!({ "status": "success" })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            AxumJson(not_found_json("unknown window id")),
        )
            .into_response()
    }
}

/// 全屏切换接口（对应视图层的 Ctrl/Cmd+F）
pub async fn fullscreen_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.windows.toggle_fullscreen(id).await {
        Some(fullscreen) => AxumJson(serde_json::json!({
            "status": "success",
            "fullscreen": fullscreen
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            AxumJson(not_found_json("unknown window id")),
        )
            .into_response(),
    }
}
