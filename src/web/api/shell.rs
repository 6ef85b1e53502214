use axum::{extract::Json, Json as AxumJson};
use serde::Deserialize;
use std::path::PathBuf;

use crate::shell;
use crate::web::utils::errors::internal_error_json;

#[derive(Deserialize)]
pub struct PathRequest {
    pub path: PathBuf,
}

/// 外部打开接口
///
/// Relays "open in the system default viewer". Failure is reported in the
/// reply and logged; it never becomes a host-level error.
pub async fn open_handler(Json(payload): Json<PathRequest>) -> AxumJson<serde_json::Value> {
    match shell::open_external(&payload.path) {
        Ok(()) => AxumJson(serde_json::json!({ "status": "success" })),
        Err(e) => {
            tracing::error!("[shell] open failed for {:?}: {}", payload.path, e);
            AxumJson(internal_error_json(&e.to_string()))
        }
    }
}

/// 删除接口（失败吞掉，仅记录）
pub async fn delete_handler(Json(payload): Json<PathRequest>) -> AxumJson<serde_json::Value> {
    let deleted = shell::delete_file(&payload.path);
    AxumJson(serde_json::json!({
        "status": "success",
        "deleted": deleted
    }))
}
