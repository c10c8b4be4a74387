//! Development server with live reload for marquee sites.
//!
//! Builds the site, serves the output directory and rebuilds whenever a
//! page, public file or image changes. Connected browsers reload over a
//! WebSocket once the rebuild finishes.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
