use crate::config::Settings;
use crate::windows::WindowRegistry;

/// Web 应用全局状态
///
/// 职责：包含所有跨请求共享的对象，通过 Arc 注入到 Axum 的 Handler 中。
/// The content responder itself is stateless; only configuration and the
/// window registry live here.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub windows: WindowRegistry,
}
