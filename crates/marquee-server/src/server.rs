//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use marquee_static::images::discover_images;
use marquee_static::{BuildConfig, StaticBuilder};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage, RELOAD_PATH};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Site build settings; the output directory is what gets served
    pub build: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

impl DevServerConfig {
    /// Directories whose changes trigger a rebuild.
    fn watch_paths(&self) -> Vec<PathBuf> {
        vec![
            self.build.pages_dir.clone(),
            self.build.public_dir.clone(),
            self.build.images.dir.clone(),
        ]
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    AddressError(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Build error: {0}")]
    BuildError(#[from] marquee_static::BuildError),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    reload: ReloadHub,
}

type SharedState = Arc<RwLock<ServerState>>;

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(mut config: DevServerConfig) -> Self {
        config.build.live_reload = true;
        Self { config }
    }

    /// Build the site and start serving it.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::AddressError(raw_addr, e.to_string()))?;

        let result = StaticBuilder::new(self.config.build.clone()).build().await?;
        tracing::info!(
            "Built {} pages with {} images in {}ms",
            result.pages,
            result.images,
            result.duration_ms
        );

        let output_dir = self.config.build.output_dir.clone();
        let (watcher, mut rx) = FileWatcher::new(
            &self.config.watch_paths(),
            &self.config.build.images.extensions,
        )
        .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            reload: ReloadHub::new(),
        }));

        // Spawn file watch handler
        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                // Fold queued events into one rebuild
                while rx.try_recv().is_ok() {}
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state, output_dir);

        tracing::info!("Starting dev server at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: SharedState, output_dir: PathBuf) -> Router {
    Router::new()
        .route(RELOAD_PATH, get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .route("/images.json", get(manifest_handler))
        .fallback_service(ServeDir::new(output_dir))
        .with_state(state)
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    match &event {
        WatchEvent::PageModified(path) => tracing::info!("Page modified: {}", path.display()),
        WatchEvent::ImageChanged(path) => tracing::info!("Image changed: {}", path.display()),
        other => tracing::debug!("Changed: {}", other.path().display()),
    }

    rebuild(state).await;
}

/// Rebuild the site and tell connected browsers about the outcome.
async fn rebuild(state: &SharedState) {
    // Held for the whole build so rebuilds never overlap
    let state = state.write().await;

    match StaticBuilder::new(state.config.build.clone()).build().await {
        Ok(result) => {
            tracing::info!(
                "Rebuilt {} pages with {} images in {}ms",
                result.pages,
                result.images,
                result.duration_ms
            );
            state.reload.send(ReloadMessage::Reload);
        }
        Err(e) => {
            tracing::warn!("Rebuild failed: {}", e);
            state.reload.send(ReloadMessage::BuildFailed {
                message: e.to_string(),
            });
        }
    }
}

/// Freshly scanned image manifest.
async fn manifest_handler(State(state): State<SharedState>) -> Json<Vec<String>> {
    let state = state.read().await;

    let filenames = match discover_images(&state.config.build.images) {
        Ok(images) => images.into_iter().map(|i| i.filename).collect(),
        Err(e) => {
            tracing::warn!("{}", e);
            Vec::new()
        }
    };

    Json(filenames)
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = {
        let state = state.read().await;
        state.reload.subscribe()
    };

    if send_message(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), ()> {
    let json = serde_json::to_string(msg).map_err(|_| ())?;
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        reload_client_script(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn site() -> (TempDir, DevServerConfig) {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::create_dir_all(root.join("public/images")).unwrap();
        fs::write(root.join("pages/index.md"), "---\ncarousel: true\n---\n").unwrap();
        fs::write(root.join("public/images/apple.jpg"), b"img").unwrap();

        let mut build = BuildConfig {
            pages_dir: root.join("pages"),
            public_dir: root.join("public"),
            output_dir: root.join("dist"),
            ..Default::default()
        };
        build.images.dir = root.join("public/images");

        let config = DevServerConfig {
            build,
            open: false,
            ..Default::default()
        };
        (temp, config)
    }

    fn state(config: DevServerConfig) -> SharedState {
        Arc::new(RwLock::new(ServerState {
            config: DevServer::new(config).config,
            reload: ReloadHub::new(),
        }))
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert!(server.config.build.live_reload);
    }

    #[test]
    fn watches_site_sources() {
        let (temp, config) = site();

        let paths = config.watch_paths();

        assert!(paths.contains(&temp.path().join("pages")));
        assert!(paths.contains(&temp.path().join("public/images")));
    }

    #[tokio::test]
    async fn rebuild_broadcasts_reload() {
        let (temp, config) = site();
        let state = state(config);
        let mut rx = state.read().await.reload.subscribe();

        rebuild(&state).await;

        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);
        let html = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(html.contains("__reload.js"));
    }

    #[tokio::test]
    async fn failed_rebuild_reports_error() {
        let (temp, config) = site();
        fs::write(temp.path().join("pages/broken.md"), "---\ntitle: x\n").unwrap();
        let state = state(config);
        let mut rx = state.read().await.reload.subscribe();

        rebuild(&state).await;

        assert!(matches!(
            rx.try_recv().unwrap(),
            ReloadMessage::BuildFailed { .. }
        ));
    }

    #[tokio::test]
    async fn serves_fresh_manifest() {
        let (temp, config) = site();
        let state = state(config);
        fs::write(temp.path().join("public/images/banana.png"), b"img").unwrap();

        let Json(filenames) = manifest_handler(State(state)).await;

        assert_eq!(filenames, vec!["apple.jpg", "banana.png"]);
    }
}
