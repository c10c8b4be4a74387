//! Development server command.

use std::path::Path;

use anyhow::Result;
use marquee_server::{DevServer, DevServerConfig};

use crate::config::load_config;

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let site = load_config(config_path)?;

    let config = DevServerConfig {
        build: site.build_config(),
        port,
        open,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
