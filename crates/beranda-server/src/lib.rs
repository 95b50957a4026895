//! Preview server with live reload for the beranda site.
//!
//! Serves the built site, watches content and configuration for changes,
//! rebuilds, and pushes WebSocket reload messages to connected clients.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
