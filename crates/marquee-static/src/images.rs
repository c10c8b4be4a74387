//! Image discovery, captions and the discovery manifest.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use marquee_carousel::ImageDescriptor;

/// Extensions picked up when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// File name of the discovery manifest in the output directory.
pub const MANIFEST_FILE: &str = "images.json";

/// Where images come from and how they are ordered.
#[derive(Debug, Clone)]
pub struct ImageSettings {
    /// Directory scanned for images (not recursive)
    pub dir: PathBuf,

    /// Accepted extensions, compared case-insensitively
    pub extensions: Vec<String>,

    /// Sort slides by caption instead of file name
    pub sort_alphabetically: bool,

    /// URL prefix images are published under, e.g. "/images/"
    pub url_prefix: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/images"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            sort_alphabetically: true,
            url_prefix: "/images/".to_string(),
        }
    }
}

impl ImageSettings {
    pub(crate) fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Descriptor for an image file name.
    pub fn describe(&self, filename: &str) -> ImageDescriptor {
        let stem = Path::new(filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(filename);
        ImageDescriptor::captioned(format!("{}{}", self.url_prefix, filename), humanize(stem))
    }
}

/// An image found on disk.
#[derive(Debug, Clone)]
pub struct DiscoveredImage {
    /// File name inside the images directory
    pub filename: String,

    /// Full path on disk
    pub path: PathBuf,

    pub descriptor: ImageDescriptor,
}

/// Errors from image discovery and the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Images directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to write manifest {path}: {message}")]
    Write { path: String, message: String },

    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },
}

/// Turn a file stem into a caption.
///
/// Splits on `-` and `_`, upper-cases the first letter of each word and
/// joins with single spaces: `bitcoin-coins` becomes `Bitcoin Coins`.
pub fn humanize(stem: &str) -> String {
    stem.split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Scan `settings.dir` for images in slide order.
pub fn discover_images(settings: &ImageSettings) -> Result<Vec<DiscoveredImage>, ImageError> {
    if !settings.dir.is_dir() {
        return Err(ImageError::DirectoryNotFound(
            settings.dir.display().to_string(),
        ));
    }

    let mut images: Vec<DiscoveredImage> = WalkDir::new(&settings.dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && settings.accepts(e.path()))
        .filter_map(|e| {
            let filename = e.file_name().to_str()?.to_string();
            Some(DiscoveredImage {
                descriptor: settings.describe(&filename),
                path: e.path().to_path_buf(),
                filename,
            })
        })
        .collect();

    images.sort_by(|a, b| a.filename.cmp(&b.filename));
    if settings.sort_alphabetically {
        images.sort_by(|a, b| compare_captions(&a.descriptor.caption, &b.descriptor.caption));
    }

    tracing::debug!(
        "Discovered {} images in {}",
        images.len(),
        settings.dir.display()
    );

    Ok(images)
}

fn compare_captions(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Write the manifest: a JSON array of file names in slide order.
pub fn write_manifest(path: &Path, filenames: &[String]) -> Result<(), ImageError> {
    let json = serde_json::to_string_pretty(filenames).map_err(|e| ImageError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    fs::write(path, json).map_err(|e| ImageError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<Vec<String>, ImageError> {
    let content = fs::read_to_string(path).map_err(|e| ImageError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ImageError::InvalidManifest {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Supplies the carousel with its ordered image list.
///
/// Providers never fail: a source that cannot be read yields an empty list,
/// which the carousel renders as its no-images state.
pub trait ImageListProvider {
    fn images(&self) -> Vec<ImageDescriptor>;
}

/// Images found by scanning a directory.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    settings: ImageSettings,
}

impl DirectoryProvider {
    pub fn new(settings: ImageSettings) -> Self {
        Self { settings }
    }
}

impl ImageListProvider for DirectoryProvider {
    fn images(&self) -> Vec<ImageDescriptor> {
        match discover_images(&self.settings) {
            Ok(images) => images.into_iter().map(|i| i.descriptor).collect(),
            Err(e) => {
                tracing::warn!("No images available: {}", e);
                Vec::new()
            }
        }
    }
}

/// Images listed in a previously written manifest, in manifest order.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    path: PathBuf,
    settings: ImageSettings,
}

impl ManifestProvider {
    pub fn new(path: impl Into<PathBuf>, settings: ImageSettings) -> Self {
        Self {
            path: path.into(),
            settings,
        }
    }
}

impl ImageListProvider for ManifestProvider {
    fn images(&self) -> Vec<ImageDescriptor> {
        match read_manifest(&self.path) {
            Ok(filenames) => filenames
                .iter()
                .map(|f| self.settings.describe(f))
                .collect(),
            Err(e) => {
                tracing::warn!("No images available: {}", e);
                Vec::new()
            }
        }
    }
}
