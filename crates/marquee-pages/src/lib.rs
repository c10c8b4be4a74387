//! Page sources for marquee sites.
//!
//! A page is a markdown or HTML file with optional YAML frontmatter. This
//! crate parses the frontmatter, renders markdown with link handling and
//! resolves the anchor attributes shared by page content and navigation.

pub mod frontmatter;
pub mod link;
pub mod page;

pub use frontmatter::{Frontmatter, FrontmatterError};
pub use link::{render_markdown, Link};
pub use page::{parse_page, PageFormat, PageSource, ParseError};
