//! Preview a built site.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::load_config;

/// Static router over a built site, using its `404.html` when present.
fn preview_router(dir: &Path) -> Router {
    let not_found = dir.join("404.html");
    let files = ServeDir::new(dir);

    if not_found.is_file() {
        Router::new().fallback_service(files.not_found_service(ServeFile::new(not_found)))
    } else {
        Router::new().fallback_service(files)
    }
}

/// Run the serve command. Without `--dir` the configured output is served.
pub async fn run(config_path: &Path, port: u16, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => load_config(config_path)?.site.output,
    };

    if !dir.join("index.html").is_file() {
        anyhow::bail!(
            "No built site in {}. Run 'marquee build' first.",
            dir.display()
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let url = format!("http://{}", addr);
    if let Err(e) = open::that(&url) {
        tracing::warn!("Failed to open browser: {}", e);
    }

    axum::serve(listener, preview_router(&dir)).await?;

    Ok(())
}
