//! Static site builder.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use marquee_carousel::{CarouselConfig, CarouselWidget, Document, ImageDescriptor};
use marquee_pages::link::escape_attr;
use marquee_pages::{parse_page, Link, PageFormat, PageSource};

use crate::assets::AssetPipeline;
use crate::images::{discover_images, write_manifest, DiscoveredImage, ImageError, ImageSettings, MANIFEST_FILE};
use crate::templates::{CarouselSection, Context, Hero, NavItem, TemplateEngine};

/// A configured header link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub title: String,
    pub href: String,
    /// Open in a new tab
    pub external: bool,
}

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding page entry points
    pub pages_dir: PathBuf,

    /// Directory copied verbatim into the output
    pub public_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Image discovery settings
    pub images: ImageSettings,

    /// Carousel configuration for pages that mount it
    pub slideshow: CarouselConfig,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Brand text in the header
    pub brand: String,

    /// Header links; derived from pages when empty
    pub nav: Vec<NavLink>,

    /// Add a robots noindex meta tag to every page
    pub noindex: bool,

    /// Include the dev server reload client
    pub live_reload: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("pages"),
            public_dir: PathBuf::from("public"),
            output_dir: PathBuf::from("dist"),
            images: ImageSettings::default(),
            slideshow: CarouselConfig::default(),
            minify: true,
            base_url: "/".to_string(),
            title: "Home".to_string(),
            brand: "Home".to_string(),
            nav: vec![],
            noindex: false,
            live_reload: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of images in the carousel
    pub images: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read pages directory: {0}")]
    ReadError(String),

    #[error("Failed to parse page: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// A page to be built.
#[derive(Debug)]
struct PageInfo {
    /// Source file path
    source_path: PathBuf,

    /// File stem, used for the output name
    stem: String,

    /// Output path
    output_path: PathBuf,

    /// Public URL
    url: String,

    /// Parsed source
    page: PageSource,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        if self.config.slideshow.interval.is_zero() {
            return Err(BuildError::ConfigError(
                "slideshow interval must be greater than zero".to_string(),
            ));
        }

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let images = self.discover_images();
        let descriptors: Vec<ImageDescriptor> =
            images.iter().map(|i| i.descriptor.clone()).collect();

        let pages = self.discover_pages()?;

        // Render pages in parallel
        let results: Vec<Result<(), BuildError>> = pages
            .par_iter()
            .map(|page| self.build_page(page, &pages, &descriptors))
            .collect();

        for result in results {
            result?;
        }

        self.copy_public()?;
        self.copy_images(&images)?;

        let filenames: Vec<String> = images.iter().map(|i| i.filename.clone()).collect();
        write_manifest(&self.config.output_dir.join(MANIFEST_FILE), &filenames)?;

        self.generate_assets()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: pages.len(),
            images: images.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Discover carousel images. A missing folder means no images.
    fn discover_images(&self) -> Vec<DiscoveredImage> {
        match discover_images(&self.config.images) {
            Ok(images) => {
                tracing::info!(
                    "Found {} images in {}",
                    images.len(),
                    self.config.images.dir.display()
                );
                images
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Discover page entry points in the pages directory.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BuildError> {
        let mut pages = Vec::new();
        let mut seen = HashSet::new();

        if !self.config.pages_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Pages directory not found: {}",
                self.config.pages_dir.display()
            )));
        }

        let mut entries: Vec<PathBuf> = WalkDir::new(&self.config.pages_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();
        entries.sort();

        for path in entries {
            let Some(format) = PageFormat::from_path(&path) else {
                continue;
            };

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("index")
                .to_string();

            if !seen.insert(stem.clone()) {
                tracing::warn!(
                    "Skipping {}: another page already builds {}.html",
                    path.display(),
                    stem
                );
                continue;
            }

            let content = fs::read_to_string(&path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;

            let page = parse_page(&content, format).map_err(|e| BuildError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            pages.push(PageInfo {
                output_path: self.config.output_dir.join(format!("{}.html", stem)),
                url: self.page_url(&stem),
                source_path: path,
                stem,
                page,
            });
        }

        pages.sort_by_key(|p| p.page.frontmatter.order.unwrap_or(999));

        Ok(pages)
    }

    /// Public URL of the page built from `stem`.
    fn page_url(&self, stem: &str) -> String {
        if stem == "index" {
            self.config.base_url.clone()
        } else {
            format!("{}{}.html", self.config.base_url, stem)
        }
    }

    /// Header navigation as seen from `current_url`.
    fn build_navigation(&self, pages: &[PageInfo], current_url: &str) -> Vec<NavItem> {
        let links: Vec<NavLink> = if self.config.nav.is_empty() {
            pages
                .iter()
                .filter(|p| p.page.frontmatter.nav)
                .map(|p| NavLink {
                    title: page_title(p),
                    href: p.url.clone(),
                    external: false,
                })
                .collect()
        } else {
            self.config.nav.clone()
        };

        links
            .into_iter()
            .map(|link| {
                let active = !link.external && self.is_active(&link.href, current_url);
                let class = if active { "nav-link active" } else { "nav-link" };
                let anchor = Link::new(link.href.clone())
                    .external(link.external)
                    .class(class)
                    .to_html(&escape_attr(&link.title));

                NavItem {
                    title: link.title,
                    href: link.href,
                    anchor,
                    active,
                }
            })
            .collect()
    }

    /// Whether a header link points at the page at `current_url`.
    /// The site root and `index.html` are the same page.
    fn is_active(&self, href: &str, current_url: &str) -> bool {
        let index = format!("{}index.html", self.config.base_url);
        let normalize = |path: &str| {
            if path == index {
                self.config.base_url.clone()
            } else {
                path.to_string()
            }
        };
        normalize(href) == normalize(current_url)
    }

    /// Build a single page.
    fn build_page(
        &self,
        page: &PageInfo,
        pages: &[PageInfo],
        images: &[ImageDescriptor],
    ) -> Result<(), BuildError> {
        let fm = &page.page.frontmatter;
        let title = page_title(page);

        let hero = (fm.hero.is_some() || fm.subtitle.is_some()).then(|| Hero {
            title: title.clone(),
            image: fm.hero.clone(),
            subtitle: fm.subtitle.clone(),
        });

        let carousel = if fm.carousel {
            Some(self.carousel_section(images)?)
        } else {
            None
        };

        let context = Context {
            title,
            site_title: self.config.title.clone(),
            description: fm.description.clone(),
            brand: self.config.brand.clone(),
            base_url: self.config.base_url.clone(),
            nav: self.build_navigation(pages, &page.url),
            hero,
            content: page.page.body_html.clone(),
            carousel,
            noindex: self.config.noindex,
            live_reload: self.config.live_reload,
        };

        let html = self
            .templates
            .render_page("page.html", &context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        if let Some(parent) = page.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&page.output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!(
            "Built {} from {}",
            page.output_path.display(),
            page.source_path.display()
        );

        Ok(())
    }

    /// Mount the carousel to capture its initial render.
    fn carousel_section(&self, images: &[ImageDescriptor]) -> Result<CarouselSection, BuildError> {
        let document = Document::new();
        let mut widget = CarouselWidget::mount(images.to_vec(), self.config.slideshow, &document)
            .map_err(|e| BuildError::ConfigError(e.to_string()))?;
        let view = widget.view();
        widget.unmount();

        let images_json = serde_json::to_string(images)
            .map_err(|e| BuildError::WriteError(e.to_string()))?
            .replace("</", "<\\/");

        Ok(CarouselSection {
            view,
            interval_ms: self.config.slideshow.interval.as_millis() as u64,
            auto_play_on_load: self.config.slideshow.auto_play_on_load,
            images_json,
            images_dir: self.config.images.dir.display().to_string(),
            extensions: self.config.images.extensions.clone(),
        })
    }

    /// Copy the public directory into the output.
    fn copy_public(&self) -> Result<(), BuildError> {
        let public = &self.config.public_dir;
        if !public.is_dir() {
            tracing::debug!("No public directory at {}", public.display());
            return Ok(());
        }

        for entry in WalkDir::new(public)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let relative = entry.path().strip_prefix(public).unwrap_or(entry.path());
            copy_file(entry.path(), &self.config.output_dir.join(relative))?;
        }

        Ok(())
    }

    /// Publish carousel images into `output/images` and drop published
    /// images that left the image list.
    fn copy_images(&self, images: &[DiscoveredImage]) -> Result<(), BuildError> {
        let images_dir = self.config.output_dir.join("images");
        let public_images = self.config.public_dir.join("images");

        for image in images {
            // copy_public already published this exact file
            if image.path == public_images.join(&image.filename) {
                continue;
            }
            copy_file(&image.path, &images_dir.join(&image.filename))?;
        }

        self.prune_images(&images_dir, images)
    }

    /// Remove stale images from `images_dir`. Files still present under
    /// `public/images` are left alone.
    fn prune_images(&self, images_dir: &Path, images: &[DiscoveredImage]) -> Result<(), BuildError> {
        if !images_dir.is_dir() {
            return Ok(());
        }

        let listed: HashSet<&str> = images.iter().map(|i| i.filename.as_str()).collect();
        let public_images = self.config.public_dir.join("images");

        for entry in WalkDir::new(images_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && self.config.images.accepts(e.path()))
        {
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if listed.contains(name) || public_images.join(name).exists() {
                continue;
            }

            fs::remove_file(entry.path())
                .map_err(|e| BuildError::WriteError(format!("{}: {}", entry.path().display(), e)))?;
            tracing::debug!("Removed stale image {}", entry.path().display());
        }

        Ok(())
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Skipping CSS minification: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("site.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(
            assets_dir.join("carousel.js"),
            AssetPipeline::generate_carousel_js(),
        )
        .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

fn page_title(page: &PageInfo) -> String {
    page.page
        .title
        .clone()
        .unwrap_or_else(|| capitalize(&page.stem))
}

fn copy_file(from: &Path, to: &Path) -> Result<(), BuildError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
    }
    fs::copy(from, to)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", to.display(), e)))?;
    Ok(())
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    struct Site {
        temp: TempDir,
    }

    impl Site {
        fn new() -> Self {
            let temp = tempdir().unwrap();
            fs::create_dir_all(temp.path().join("pages")).unwrap();
            fs::create_dir_all(temp.path().join("public/images")).unwrap();
            Self { temp }
        }

        fn page(&self, name: &str, content: &str) -> &Self {
            fs::write(self.temp.path().join("pages").join(name), content).unwrap();
            self
        }

        fn image(&self, name: &str) -> &Self {
            fs::write(self.temp.path().join("public/images").join(name), b"img").unwrap();
            self
        }

        fn out(&self) -> PathBuf {
            self.temp.path().join("dist")
        }

        fn config(&self) -> BuildConfig {
            BuildConfig {
                pages_dir: self.temp.path().join("pages"),
                public_dir: self.temp.path().join("public"),
                output_dir: self.out(),
                images: ImageSettings {
                    dir: self.temp.path().join("public/images"),
                    ..Default::default()
                },
                brand: "maxvette.com".to_string(),
                title: "maxvette.com".to_string(),
                ..Default::default()
            }
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.out().join(name)).unwrap()
        }
    }

    #[tokio::test]
    async fn builds_simple_site() {
        let site = Site::new();
        site.page("index.md", "---\ntitle: Home\n---\nWelcome to my page");

        let result = StaticBuilder::new(site.config()).build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.images, 0);
        assert!(site.out().join("index.html").exists());
        assert!(site.out().join("assets/site.css").exists());
        assert!(site.out().join("assets/carousel.js").exists());
        assert!(site.read("index.html").contains("Welcome to my page"));
    }

    #[tokio::test]
    async fn mounts_carousel_with_discovered_images() {
        let site = Site::new();
        site.page("index.md", "---\ntitle: Home\ncarousel: true\n---\n")
            .image("cherry.jpg")
            .image("apple.jpg")
            .image("banana-split.png");

        let result = StaticBuilder::new(site.config()).build().await.unwrap();
        let html = site.read("index.html");

        assert_eq!(result.images, 3);
        assert!(html.contains(r#"alt="Apple""#));
        assert!(html.contains(r#"aria-label="Go to image 3""#));
        assert!(html.contains("Banana Split"));
        assert!(html.contains("Play Slideshow"));
        assert!(html.contains(r#"data-interval="2000""#));
        assert!(site.out().join("images/apple.jpg").exists());
    }

    #[tokio::test]
    async fn writes_image_manifest_in_slide_order() {
        let site = Site::new();
        site.page("index.md", "# Home")
            .image("zebra.jpg")
            .image("apple.webp");

        StaticBuilder::new(site.config()).build().await.unwrap();

        let manifest: Vec<String> = serde_json::from_str(&site.read("images.json")).unwrap();
        assert_eq!(manifest, vec!["apple.webp", "zebra.jpg"]);
    }

    #[tokio::test]
    async fn embeds_slide_list_for_the_runtime() {
        let site = Site::new();
        site.page("index.md", "---\ncarousel: true\n---\n")
            .image("cherry.jpg")
            .image("apple.jpg");

        StaticBuilder::new(site.config()).build().await.unwrap();

        let html = site.read("index.html");
        let open = r#"<script type="application/json" id="carousel-images">"#;
        let start = html.find(open).unwrap() + open.len();
        let end = start + html[start..].find("</script>").unwrap();
        let embedded: Vec<ImageDescriptor> = serde_json::from_str(&html[start..end]).unwrap();

        assert_eq!(
            embedded,
            vec![
                ImageDescriptor::captioned("/images/apple.jpg", "Apple"),
                ImageDescriptor::captioned("/images/cherry.jpg", "Cherry"),
            ]
        );
    }

    #[tokio::test]
    async fn shows_no_images_message() {
        let site = Site::new();
        site.page("index.md", "---\ncarousel: true\n---\n");

        let result = StaticBuilder::new(site.config()).build().await.unwrap();
        let html = site.read("index.html");

        assert_eq!(result.images, 0);
        assert!(html.contains("No Images Found"));
        assert!(!html.contains("carousel-container"));
    }

    #[tokio::test]
    async fn builds_html_entry_points() {
        let site = Site::new();
        site.page("index.md", "# Home")
            .page(
                "bitcoin.html",
                "<html><head><title>Bitcoin</title></head><body><h1>Why Bitcoin</h1></body></html>",
            )
            .page("notes.txt", "ignored");

        let result = StaticBuilder::new(site.config()).build().await.unwrap();

        assert_eq!(result.pages, 2);
        let html = site.read("bitcoin.html");
        assert!(html.contains("<title>Bitcoin - maxvette.com</title>"));
        assert!(html.contains("<h1>Why Bitcoin</h1>"));
        assert!(!site.out().join("notes.html").exists());
    }

    #[tokio::test]
    async fn marks_active_nav_link() {
        let site = Site::new();
        site.page("index.md", "---\ntitle: Home\norder: 1\n---\n")
            .page("bitcoin.md", "---\ntitle: Bitcoin\norder: 2\n---\n");

        StaticBuilder::new(site.config()).build().await.unwrap();

        let bitcoin = site.read("bitcoin.html");
        assert!(bitcoin.contains(r#"<a href="/bitcoin.html" class="nav-link active">Bitcoin</a>"#));
        assert!(bitcoin.contains(r#"<a href="/" class="nav-link">Home</a>"#));

        let index = site.read("index.html");
        assert!(index.contains(r#"<a href="/" class="nav-link active">Home</a>"#));
    }

    #[tokio::test]
    async fn configured_nav_treats_index_html_as_root() {
        let site = Site::new();
        site.page("index.md", "# Home");

        let config = BuildConfig {
            nav: vec![
                NavLink {
                    title: "Home".to_string(),
                    href: "/index.html".to_string(),
                    external: false,
                },
                NavLink {
                    title: "Book".to_string(),
                    href: "https://nakamotobook.com/".to_string(),
                    external: true,
                },
            ],
            ..site.config()
        };

        StaticBuilder::new(config).build().await.unwrap();

        let html = site.read("index.html");
        assert!(html.contains(r#"<a href="/index.html" class="nav-link active">Home</a>"#));
        assert!(html.contains(
            r#"<a href="https://nakamotobook.com/" class="nav-link" target="_blank" rel="noopener noreferrer">Book</a>"#
        ));
    }

    #[tokio::test]
    async fn hidden_pages_stay_out_of_nav() {
        let site = Site::new();
        site.page("index.md", "---\ntitle: Home\n---\n")
            .page("secret.md", "---\ntitle: Secret\nnav: false\n---\n");

        StaticBuilder::new(site.config()).build().await.unwrap();

        assert!(!site.read("index.html").contains("Secret"));
        assert!(site.out().join("secret.html").exists());
    }

    #[tokio::test]
    async fn copies_public_files() {
        let site = Site::new();
        site.page("index.md", "# Home");
        fs::write(site.temp.path().join("public/favicon.ico"), b"ico").unwrap();

        StaticBuilder::new(site.config()).build().await.unwrap();

        assert!(site.out().join("favicon.ico").exists());
    }

    fn photos_config(site: &Site) -> BuildConfig {
        let photos = site.temp.path().join("photos");
        fs::create_dir_all(&photos).unwrap();
        let mut config = site.config();
        config.images.dir = photos;
        config
    }

    #[tokio::test]
    async fn rebuild_refreshes_images_outside_public() {
        let site = Site::new();
        site.page("index.md", "---\ncarousel: true\n---\n");
        let config = photos_config(&site);
        let source = config.images.dir.join("apple.jpg");

        fs::write(&source, b"v1").unwrap();
        StaticBuilder::new(config.clone()).build().await.unwrap();
        fs::write(&source, b"v2").unwrap();
        StaticBuilder::new(config).build().await.unwrap();

        assert_eq!(fs::read(site.out().join("images/apple.jpg")).unwrap(), b"v2");
    }

    #[tokio::test]
    async fn rebuild_drops_removed_images() {
        let site = Site::new();
        site.page("index.md", "# Home");
        let config = photos_config(&site);
        fs::write(config.images.dir.join("apple.jpg"), b"img").unwrap();
        fs::write(config.images.dir.join("banana.jpg"), b"img").unwrap();

        StaticBuilder::new(config.clone()).build().await.unwrap();
        assert!(site.out().join("images/banana.jpg").exists());

        fs::remove_file(config.images.dir.join("banana.jpg")).unwrap();
        let result = StaticBuilder::new(config).build().await.unwrap();

        assert_eq!(result.images, 1);
        assert!(site.out().join("images/apple.jpg").exists());
        assert!(!site.out().join("images/banana.jpg").exists());
    }

    #[tokio::test]
    async fn keeps_public_images_outside_the_carousel() {
        let site = Site::new();
        site.page("index.md", "# Home");
        site.image("logo.png");
        let config = photos_config(&site);
        fs::write(config.images.dir.join("apple.jpg"), b"img").unwrap();

        StaticBuilder::new(config).build().await.unwrap();

        assert!(site.out().join("images/logo.png").exists());
        assert!(site.out().join("images/apple.jpg").exists());
    }

    #[tokio::test]
    async fn rebuild_drops_images_removed_from_public() {
        let site = Site::new();
        site.page("index.md", "# Home").image("apple.jpg").image("cherry.jpg");

        StaticBuilder::new(site.config()).build().await.unwrap();
        fs::remove_file(site.temp.path().join("public/images/cherry.jpg")).unwrap();
        StaticBuilder::new(site.config()).build().await.unwrap();

        assert!(site.out().join("images/apple.jpg").exists());
        assert!(!site.out().join("images/cherry.jpg").exists());
    }

    #[tokio::test]
    async fn adds_noindex_when_configured() {
        let site = Site::new();
        site.page("index.md", "# Home");

        StaticBuilder::new(BuildConfig {
            noindex: true,
            ..site.config()
        })
        .build()
        .await
        .unwrap();

        assert!(site.read("index.html").contains(r#"content="noindex""#));
    }

    #[tokio::test]
    async fn missing_pages_dir_is_an_error() {
        let temp = tempdir().unwrap();

        let result = StaticBuilder::new(BuildConfig {
            pages_dir: temp.path().join("missing"),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        })
        .build()
        .await;

        assert!(matches!(result, Err(BuildError::ReadError(_))));
    }

    #[tokio::test]
    async fn rejects_zero_interval() {
        let site = Site::new();
        site.page("index.md", "# Home");

        let result = StaticBuilder::new(BuildConfig {
            slideshow: CarouselConfig::from_millis(0, false),
            ..site.config()
        })
        .build()
        .await;

        assert!(matches!(result, Err(BuildError::ConfigError(_))));
    }
}
