mod config;
mod library;
mod shell;
mod web;
mod windows;

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::web::state::AppState;
use crate::windows::WindowRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mira_host=info".parse().unwrap())
                .add_directive("tower_http=debug".parse().unwrap()),
        )
        .init();

    info!("[Startup] Mira host initializing...");

    let settings = Settings::new()?;
    info!(
        "[Config] Binding at {}:{}, {} library roots",
        settings.server.host,
        settings.server.port,
        settings.library.roots.len()
    );

    let windows = WindowRegistry::new();
    // The first window opens with the host, matching the viewer's startup.
    windows.open("Mira").await;

    let state = Arc::new(AppState { settings, windows });
    let app = web::build_router(state.clone());

    let addr = format!(
        "{}:{}",
        state.settings.server.host, state.settings.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[Startup] Content responder ready at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
