//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use marquee_carousel::CarouselConfig;
use marquee_pages::link::is_absolute_url;
use marquee_static::images::DEFAULT_EXTENSIONS;
use marquee_static::{BuildConfig, ImageSettings, NavLink};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub nav: Vec<NavEntry>,
    pub images: ImagesSection,
    pub slideshow: SlideshowSection,
    pub build: BuildSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub brand: Option<String>,
    pub base_url: String,
    pub pages: PathBuf,
    pub public: PathBuf,
    pub output: PathBuf,
    pub noindex: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            brand: None,
            base_url: "/".to_string(),
            pages: PathBuf::from("pages"),
            public: PathBuf::from("public"),
            output: PathBuf::from("dist"),
            noindex: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NavEntry {
    pub title: String,
    pub href: String,
    /// Defaults to whether `href` is an absolute URL
    pub external: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImagesSection {
    pub dir: PathBuf,
    pub extensions: Vec<String>,
    pub sort_alphabetically: bool,
}

impl Default for ImagesSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/images"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            sort_alphabetically: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SlideshowSection {
    pub interval_ms: u64,
    pub auto_play_on_load: bool,
}

impl Default for SlideshowSection {
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            auto_play_on_load: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self { minify: true }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(SiteConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse_config(content: &str) -> Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(content)?;
    if config.slideshow.interval_ms == 0 {
        anyhow::bail!("slideshow.interval_ms must be greater than zero");
    }
    Ok(config)
}

impl SiteConfig {
    /// Image discovery settings, published under `{base_url}images/`.
    pub fn image_settings(&self) -> ImageSettings {
        ImageSettings {
            dir: self.images.dir.clone(),
            extensions: self.images.extensions.clone(),
            sort_alphabetically: self.images.sort_alphabetically,
            url_prefix: format!("{}images/", self.site.base_url),
        }
    }

    pub fn slideshow(&self) -> CarouselConfig {
        CarouselConfig::from_millis(
            self.slideshow.interval_ms,
            self.slideshow.auto_play_on_load,
        )
    }

    /// Settings for the static builder.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            pages_dir: self.site.pages.clone(),
            public_dir: self.site.public.clone(),
            output_dir: self.site.output.clone(),
            images: self.image_settings(),
            slideshow: self.slideshow(),
            minify: self.build.minify,
            base_url: self.site.base_url.clone(),
            title: self.site.title.clone(),
            brand: self
                .site
                .brand
                .clone()
                .unwrap_or_else(|| self.site.title.clone()),
            nav: self
                .nav
                .iter()
                .map(|entry| NavLink {
                    title: entry.title.clone(),
                    href: entry.href.clone(),
                    external: entry.external.unwrap_or_else(|| is_absolute_url(&entry.href)),
                })
                .collect(),
            noindex: self.site.noindex,
            live_reload: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();
        let build = config.build_config();

        assert_eq!(build.pages_dir, PathBuf::from("pages"));
        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert_eq!(build.images.url_prefix, "/images/");
        assert_eq!(build.slideshow.interval, Duration::from_millis(2000));
        assert!(!build.slideshow.auto_play_on_load);
        assert!(build.minify);
        assert!(build.noindex);
    }

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            r#"
[site]
title = "maxvette.com"
base_url = "/site/"
noindex = false

[[nav]]
title = "Home"
href = "/"

[[nav]]
title = "Book"
href = "https://nakamotobook.com/"

[images]
dir = "photos"
extensions = ["jpg"]
sort_alphabetically = false

[slideshow]
interval_ms = 5000
auto_play_on_load = true
"#,
        )
        .unwrap();

        let build = config.build_config();

        assert_eq!(build.brand, "maxvette.com");
        assert_eq!(build.images.dir, PathBuf::from("photos"));
        assert_eq!(build.images.url_prefix, "/site/images/");
        assert_eq!(build.images.extensions, vec!["jpg"]);
        assert!(!build.images.sort_alphabetically);
        assert_eq!(build.slideshow, CarouselConfig::from_millis(5000, true));
        assert!(!build.noindex);
        assert_eq!(
            build.nav,
            vec![
                NavLink {
                    title: "Home".to_string(),
                    href: "/".to_string(),
                    external: false,
                },
                NavLink {
                    title: "Book".to_string(),
                    href: "https://nakamotobook.com/".to_string(),
                    external: true,
                },
            ]
        );
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(parse_config("[slideshow]\ninterval_ms = 0\n").is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
