//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use marquee_static::StaticBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let site = load_config(config_path)?;

    let mut config = site.build_config();
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = StaticBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} pages with {} images in {}ms",
        result.pages,
        result.images,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
