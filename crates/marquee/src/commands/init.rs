//! Create a starter site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `content` to `path` unless it exists and `overwrite` is off.
fn write_starter(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

/// Run the init command in the current directory.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    init_site(Path::new("."), config_path, yes)
}

fn init_site(root: &Path, config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing marquee site...");

    write_starter(&root.join(config_path), DEFAULT_CONFIG, yes)?;
    write_starter(&root.join("pages/index.md"), DEFAULT_INDEX, yes)?;
    write_starter(&root.join("pages/bitcoin.md"), DEFAULT_BITCOIN, yes)?;

    let images_dir = root.join("public/images");
    fs::create_dir_all(&images_dir)
        .with_context(|| format!("Failed to create {}", images_dir.display()))?;

    tracing::info!("Initialization complete!");
    tracing::info!(
        "Add images to {} and run 'marquee dev' to start the development server.",
        images_dir.display()
    );

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Marquee configuration

[site]
title = "My Site"
base_url = "/"
pages = "pages"
public = "public"
output = "dist"
# Ask search engines not to index the site
noindex = true

[[nav]]
title = "Home"
href = "/"

[[nav]]
title = "Bitcoin"
href = "/bitcoin.html"

[images]
# Images in this folder become carousel slides; file names become captions
dir = "public/images"
extensions = ["jpg", "jpeg", "png", "gif", "webp"]
sort_alphabetically = true

[slideshow]
# Auto-play interval in milliseconds
interval_ms = 2000
auto_play_on_load = false

[build]
minify = true
"#;

const DEFAULT_INDEX: &str = r#"---
title: Home
order: 1
carousel: true
---

## Bitcoin Links

- [Bitcoin Whitepaper](https://bitcoin.org/bitcoin.pdf)
- [Why Bitcoin](/bitcoin.html)
"#;

const DEFAULT_BITCOIN: &str = r#"---
title: Bitcoin
order: 2
subtitle: Bitcoin is Freedom
---

Bitcoin is a peer-to-peer electronic cash system. Read the
[whitepaper](https://bitcoin.org/bitcoin.pdf) or go back [home](/).
"#;
