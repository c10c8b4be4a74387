//! Anchor rendering shared by page content and navigation.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

const SAFE_REL: &str = "noopener noreferrer";

/// An anchor element.
///
/// External links open in a new tab. Any link that opens in a new tab gets
/// `rel="noopener noreferrer"` unless an explicit `rel` was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub external: bool,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub title: Option<String>,
    pub class: Option<String>,
}

impl Link {
    /// Link to `href` with no extra attributes.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    /// Link that is external when `href` points off-site.
    pub fn auto(href: impl Into<String>) -> Self {
        let href = href.into();
        let external = is_absolute_url(&href);
        Self {
            href,
            external,
            ..Default::default()
        }
    }

    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Effective `target` attribute.
    pub fn resolved_target(&self) -> Option<&str> {
        if self.external {
            Some("_blank")
        } else {
            self.target.as_deref()
        }
    }

    /// Effective `rel` attribute.
    pub fn resolved_rel(&self) -> Option<&str> {
        match self.rel.as_deref() {
            Some(rel) => Some(rel),
            None if self.resolved_target() == Some("_blank") => Some(SAFE_REL),
            None => None,
        }
    }

    /// Opening `<a>` tag.
    pub fn open_tag(&self) -> String {
        let mut tag = format!(r#"<a href="{}""#, escape_attr(&self.href));
        for (name, value) in [
            ("class", self.class.as_deref()),
            ("title", self.title.as_deref()),
            ("target", self.resolved_target()),
            ("rel", self.resolved_rel()),
        ] {
            if let Some(value) = value {
                tag.push_str(&format!(r#" {}="{}""#, name, escape_attr(value)));
            }
        }
        tag.push('>');
        tag
    }

    /// Complete anchor around already-escaped `inner_html`.
    pub fn to_html(&self, inner_html: &str) -> String {
        format!("{}{}</a>", self.open_tag(), inner_html)
    }
}

/// Whether `href` points to another origin.
pub fn is_absolute_url(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render markdown to HTML. Every link goes through [`Link::auto`].
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) => {
            let mut link = Link::auto(dest_url.to_string());
            if !title.is_empty() {
                link.title = Some(title.to_string());
            }
            Event::InlineHtml(CowStr::from(link.open_tag()))
        }
        Event::End(TagEnd::Link) => Event::InlineHtml(CowStr::Borrowed("</a>")),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
