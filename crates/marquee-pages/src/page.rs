//! Page source parsing.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
use crate::link::render_markdown;

/// Source format of a page entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Markdown,
    Html,
}

impl PageFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") => Some(PageFormat::Markdown),
            Some("html") | Some("htm") => Some(PageFormat::Html),
            _ => None,
        }
    }
}

/// A parsed page, ready to be placed inside the site layout.
#[derive(Debug, Clone)]
pub struct PageSource {
    /// Frontmatter, defaults when absent
    pub frontmatter: Frontmatter,

    /// Page title from frontmatter, `<title>` or the first `<h1>`
    pub title: Option<String>,

    /// Rendered body HTML
    pub body_html: String,

    pub format: PageFormat,
}

/// Errors that can occur when parsing a page.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse a page source.
///
/// Markdown is rendered to HTML. HTML pages may be fragments or full
/// documents; for full documents only the `<body>` contents are kept.
pub fn parse_page(source: &str, format: PageFormat) -> Result<PageSource, ParseError> {
    let (frontmatter, content) = extract_frontmatter(source)?;
    let frontmatter = frontmatter.unwrap_or_default();

    let (body_html, document_title) = match format {
        PageFormat::Markdown => (render_markdown(content), None),
        PageFormat::Html => {
            let body = body_contents(content).unwrap_or(content).trim().to_string();
            (body, first_capture(title_pattern(), content))
        }
    };

    let title = frontmatter
        .title
        .clone()
        .or(document_title)
        .or_else(|| first_capture(heading_pattern(), &body_html));

    Ok(PageSource {
        frontmatter,
        title,
        body_html,
        format,
    })
}

fn body_contents(html: &str) -> Option<&str> {
    body_pattern()
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn first_capture(pattern: &Regex, html: &str) -> Option<String> {
    let text = pattern.captures(html)?.get(1)?.as_str();
    let text = tag_pattern().replace_all(text, "");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn body_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap())
}

fn title_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap())
}

fn heading_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap())
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}
