use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// 应用配置总结构
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub library: LibrarySettings,
}

/// 服务相关配置（监听地址、端口）
///
/// The host binds a loopback address only: the view layer is the sole
/// intended client, so the content responder is never exposed off-box.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// 媒体库配置（扫描根目录与浏览顺序）
#[derive(Debug, Deserialize, Clone)]
pub struct LibrarySettings {
    /// Paths (files or directories) offered to the view layer on startup.
    pub roots: Vec<PathBuf>,
    /// Shuffle the discovered list before handing it to the view layer.
    #[serde(default)]
    pub shuffle: bool,
}

impl Settings {
    /// 加载配置：支持默认值、可选配置文件、环境变量覆盖
    pub fn new() -> anyhow::Result<Self> {
        let builder = Config::builder()
            // 默认值（代码内硬编码）
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 7670)?
            .set_default::<&str, Vec<String>>("library.roots", Vec::new())?
            .set_default("library.shuffle", false)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("MIRA").separator("__"));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
