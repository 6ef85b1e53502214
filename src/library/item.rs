use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::VIDEO_EXTENSIONS;
use crate::web::utils::streaming::SCHEME_PREFIX;

/// 媒体条目元数据
///
/// What the view layer needs to render one file: whether it still exists,
/// its size, whether it is a video, and the sidecar caption when present.
/// Built fresh per request; nothing here is cached between calls.
#[derive(Debug, Clone, Serialize)]
pub struct MediaItem {
    pub path: PathBuf,
    pub url: String,
    pub filename: String,
    /// Upper-cased extension shown in the info panel, e.g. "PNG".
    pub format: String,
    pub exists: bool,
    pub is_video: bool,
    pub file_size: Option<u64>,
    pub caption: Option<String>,
}

impl MediaItem {
    /// Stat the file and load its sidecar caption.
    ///
    /// A failed stat marks the item missing rather than erroring: the view
    /// layer renders a placeholder for it. Caption faults only lose the
    /// caption.
    pub async fn load(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext = path
            .extension()
            .and_then(|value| value.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let mut item = Self {
            url: scheme_url(&path),
            filename,
            format: ext.to_ascii_uppercase(),
            exists: false,
            is_video: VIDEO_EXTENSIONS.contains(&ext.as_str()),
            file_size: None,
            caption: None,
            path,
        };

        match tokio::fs::metadata(&item.path).await {
            Ok(metadata) if metadata.is_file() => {
                item.exists = true;
                item.file_size = Some(metadata.len());
                item.caption = load_caption(&item.path).await;
            }
            Ok(_) => {
                warn!("[library] not a regular file: {:?}", item.path);
            }
            Err(e) => {
                warn!("[library] stat failed for {:?}: {}", item.path, e);
            }
        }

        item
    }
}

/// Scheme URL the view layer embeds as an `<img>`/`<video>` source.
pub fn scheme_url(path: &Path) -> String {
    format!(
        "{}{}",
        SCHEME_PREFIX,
        urlencoding::encode(&path.to_string_lossy())
    )
}

/// Sidecar caption: same base name, `.txt` extension. Read failures are
/// logged and leave the caption unset.
async fn load_caption(path: &Path) -> Option<String> {
    let caption_path = path.with_extension("txt");
    match tokio::fs::read_to_string(&caption_path).await {
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!("[library] caption read failed for {:?}: {}", caption_path, e);
            None
        }
    }
}
