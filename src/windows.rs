use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// 窗口状态
#[derive(Debug, Clone, Serialize)]
pub struct WindowInfo {
    pub id: Uuid,
    pub title: String,
    pub fullscreen: bool,
    pub focused: bool,
    #[serde(skip)]
    opened_seq: u64,
}

#[derive(Default)]
struct Inner {
    windows: HashMap<Uuid, WindowInfo>,
    focused: Option<Uuid>,
    next_seq: u64,
}

/// 窗口注册表
///
/// Windows are tracked by id in an explicit registry; there is no single
/// nullable "current window". The focused id always points at a live
/// entry, and closing the focused window refocuses the most recently
/// opened survivor.
#[derive(Clone, Default)]
pub struct WindowRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window; the new window takes focus.
    pub async fn open(&self, title: &str) -> WindowInfo {
        let mut inner = self.inner.write().await;
        let id = Uuid::new_v4();
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let window = WindowInfo {
            id,
            title: title.to_string(),
            fullscreen: false,
            focused: true,
            opened_seq: seq,
        };
        inner.windows.insert(id, window.clone());
        inner.focused = Some(id);

        info!("[windows] opened {} ({})", id, title);
        window
    }

    /// Close a window. Closing an unknown id is a logged no-op.
    pub async fn close(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        if inner.windows.remove(&id).is_none() {
            warn!("[windows] close for unknown window {}", id);
            return false;
        }
        if inner.focused == Some(id) {
            inner.focused = inner
                .windows
                .values()
                .max_by_key(|w| w.opened_seq)
                .map(|w| w.id);
        }
        info!("[windows] closed {}", id);
        true
    }

    pub async fn focus(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        if !inner.windows.contains_key(&id) {
            warn!("[windows] focus for unknown window {}", id);
            return false;
        }
        inner.focused = Some(id);
        true
    }

    /// Toggle fullscreen; returns the new state, or `None` for unknown ids.
    pub async fn toggle_fullscreen(&self, id: Uuid) -> Option<bool> {
        let mut inner = self.inner.write().await;
        let window = inner.windows.get_mut(&id)?;
        window.fullscreen = !window.fullscreen;
        Some(window.fullscreen)
    }

    /// Snapshot of all windows, most recently opened first.
    pub async fn list(&self) -> Vec<WindowInfo> {
        let inner = self.inner.read().await;
        let mut windows: Vec<WindowInfo> = inner
            .windows
            .values()
            .map(|w| {
                let mut w = w.clone();
                w.focused = inner.focused == Some(w.id);
                w
            })
            .collect();
        windows.sort_by(|a, b| b.opened_seq.cmp(&a.opened_seq));
        windows
    }

    pub async fn focused(&self) -> Option<Uuid> {
        self.inner.read().await.focused
    }
}
