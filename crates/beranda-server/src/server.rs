//! Development server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use beranda_static::{BuildConfig, ConfigFile, StaticBuilder};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Build configuration used for the initial build and rebuilds
    pub build: BuildConfig,

    /// Path to the site configuration file, also watched
    pub config_path: PathBuf,

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
            build: BuildConfig {
                live_reload: true,
                ..Default::default()
            },
            config_path: PathBuf::from("beranda.toml"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Build error: {0}")]
    BuildError(String),
}

/// Shared server state.
struct ServerState {
    hub: ReloadHub,
    ws_url: String,
}

/// Development server: serves the built site, rebuilds on change, and
/// pushes reloads to connected clients.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let builder = Arc::new(RwLock::new(StaticBuilder::new(self.config.build.clone())));

        // Initial build so there is something to serve
        builder
            .read()
            .await
            .build()
            .await
            .map_err(|e| ServerError::BuildError(e.to_string()))?;

        let hub = ReloadHub::new();
        let state = Arc::new(ServerState {
            hub: hub.clone(),
            ws_url: format!("ws://{}/__reload", addr),
        });

        // Watch content and configuration
        let watch_paths = vec![
            self.config.build.content_dir.clone(),
            self.config.config_path.clone(),
        ];

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        let rebuild_builder = Arc::clone(&builder);
        let base = self.config.build.clone();
        let config_path = self.config.config_path.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&rebuild_builder, &base, &config_path, &hub, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = Router::new()
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .fallback_service(ServeDir::new(&self.config.build.output_dir))
            .with_state(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Rebuild the site and notify clients.
///
/// Configuration edits re-read the config file and replace the builder so
/// the rebuild picks up new settings. The served output directory and the
/// reload script stay pinned to the startup configuration; the server
/// cannot re-point `ServeDir` while running.
async fn handle_watch_event(
    builder: &RwLock<StaticBuilder>,
    base: &BuildConfig,
    config_path: &Path,
    hub: &ReloadHub,
    event: WatchEvent,
) {
    match &event {
        WatchEvent::ContentModified(path) => {
            tracing::info!("Content modified: {}", path.display());
        }
        WatchEvent::ConfigModified(path) => {
            tracing::info!("Configuration modified: {}", path.display());

            match ConfigFile::load(config_path) {
                Ok(file) => {
                    let mut build = file.build_config();
                    build.output_dir = base.output_dir.clone();
                    build.live_reload = base.live_reload;
                    *builder.write().await = StaticBuilder::new(build);
                }
                Err(e) => {
                    tracing::warn!("Ignoring config change: {}", e);
                    return;
                }
            }
        }
        WatchEvent::Created(path) | WatchEvent::Deleted(path) | WatchEvent::Modified(path) => {
            tracing::debug!("Changed: {}", path.display());
        }
    }

    match builder.read().await.build().await {
        Ok(result) => {
            tracing::info!("Rebuilt {} pages in {}ms", result.pages, result.duration_ms);
            hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            tracing::warn!("Rebuild failed: {}", e);
        }
    }
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hub.subscribe();

    // Send connected message
    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    // Forward reload messages to the client
    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let script = reload_client_script(&state.ws_url);
    ([("content-type", "application/javascript")], script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());

        assert_eq!(server.config.port, 7777);
        assert!(server.config.build.live_reload);
    }

    #[tokio::test]
    async fn config_change_rebuilds_with_new_settings() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("learning.json"), "[]").unwrap();

        let config_path = temp.path().join("beranda.toml");
        let site_toml = |title: &str| {
            format!(
                "[site]\ntitle = \"{}\"\ntagline = \"Komunitas\"\n\n[content]\ndir = \"{}\"\n",
                title,
                content.display()
            )
        };

        fs::write(&config_path, site_toml("Judul Lama")).unwrap();
        let mut base = ConfigFile::load(&config_path).unwrap().build_config();
        base.output_dir = out.clone();
        base.live_reload = true;

        let builder = RwLock::new(StaticBuilder::new(base.clone()));
        builder.read().await.build().await.unwrap();

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("Judul Lama"));

        // Edit the config while the server is "running"
        fs::write(&config_path, site_toml("Judul Baru")).unwrap();

        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        handle_watch_event(
            &builder,
            &base,
            &config_path,
            &hub,
            WatchEvent::ConfigModified(config_path.clone()),
        )
        .await;

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("Judul Baru"));
        assert!(!home.contains("Judul Lama"));
        assert!(matches!(rx.try_recv(), Ok(ReloadMessage::Reload)));
    }

    #[tokio::test]
    async fn malformed_config_change_keeps_current_settings() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("learning.json"), "[]").unwrap();

        let config_path = temp.path().join("beranda.toml");
        fs::write(
            &config_path,
            format!(
                "[site]\ntitle = \"Judul Lama\"\n\n[content]\ndir = \"{}\"\n",
                content.display()
            ),
        )
        .unwrap();

        let mut base = ConfigFile::load(&config_path).unwrap().build_config();
        base.output_dir = out.clone();

        let builder = RwLock::new(StaticBuilder::new(base.clone()));
        builder.read().await.build().await.unwrap();

        fs::write(&config_path, "not = [valid").unwrap();

        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        handle_watch_event(
            &builder,
            &base,
            &config_path,
            &hub,
            WatchEvent::ConfigModified(config_path.clone()),
        )
        .await;

        // No rebuild, no reload; the old output is untouched
        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("Judul Lama"));
        assert!(rx.try_recv().is_err());
    }
}
