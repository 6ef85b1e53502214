use axum::{
    extract::{Query, State},
    Json as AxumJson,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::library::{self, MediaItem};
use crate::web::state::AppState;

#[derive(Deserialize)]
pub struct ListParams {
    /// Override the configured scan roots for this one listing.
    pub root: Option<PathBuf>,
    pub shuffle: Option<bool>,
}

#[derive(Deserialize)]
pub struct ItemParams {
    pub path: PathBuf,
}

/// 媒体列表接口
///
/// Walks the configured roots (or a one-off override) and returns the
/// scheme URLs the view layer should render, optionally shuffled.
pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AxumJson<serde_json::Value> {
    let roots: Vec<PathBuf> = match params.root {
        Some(root) => vec![root],
        None => state.settings.library.roots.clone(),
    };
    let shuffle = params.shuffle.unwrap_or(state.settings.library.shuffle);

    // The walk is blocking filesystem work; keep it off the request reactor.
    let files = tokio::task::spawn_blocking(move || {
        let mut files = library::find_media_files(&roots);
        if shuffle {
            library::shuffle_in_place(&mut files);
        }
        files
    })
    .await
    .unwrap_or_else(|e| {
        tracing::error!("[library] scan task failed: {}", e);
        Vec::new()
    });

    let urls: Vec<String> = files.iter().map(|p| library::item::scheme_url(p)).collect();
    AxumJson(serde_json::json!({
        "status": "success",
        "count": files.len(),
        "data": urls
    }))
}

/// 单条媒体元数据接口（存在性、大小、caption 附注）
pub async fn item_handler(Query(params): Query<ItemParams>) -> AxumJson<MediaItem> {
    AxumJson(MediaItem::load(params.path).await)
}
