//! Static site generator for marquee sites.
//!
//! Turns a pages directory and an images folder into a static site: every
//! page gets the shared header, pages that ask for it mount the image
//! carousel, and the discovered image list is published as a manifest.

pub mod assets;
pub mod builder;
pub mod images;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, NavLink, StaticBuilder};
pub use images::{
    DirectoryProvider, ImageError, ImageListProvider, ImageSettings, ManifestProvider,
};
