//! Template engine for rendering site pages.

use minijinja::Environment;
use serde::Serialize;

use marquee_carousel::CarouselView;

/// A link in the shared header.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// Link destination
    pub href: String,
    /// Rendered anchor element
    pub anchor: String,
    /// Whether this link points at the page being rendered
    pub active: bool,
}

/// Hero block above the page content.
#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: String,
    pub image: Option<String>,
    pub subtitle: Option<String>,
}

/// Carousel mounted on a page.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselSection {
    /// Initial render, `None` when no images were found
    pub view: Option<CarouselView>,
    /// Auto-play period handed to the client runtime
    pub interval_ms: u64,
    pub auto_play_on_load: bool,
    /// Slide list as JSON for the client runtime
    pub images_json: String,
    /// Shown in the no-images message
    pub images_dir: String,
    pub extensions: Vec<String>,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Meta description
    pub description: Option<String>,
    /// Brand text in the header
    pub brand: String,
    /// Base URL
    pub base_url: String,
    /// Header navigation
    pub nav: Vec<NavItem>,
    pub hero: Option<Hero>,
    /// Rendered content HTML
    pub content: String,
    pub carousel: Option<CarouselSection>,
    /// Ask crawlers not to index the page
    pub noindex: bool,
    /// Include the dev server reload client
    pub live_reload: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("header.html".to_string(), HEADER_TEMPLATE.to_string())
            .expect("Failed to add header template");

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        env.add_template_owned("carousel.html".to_string(), CAROUSEL_TEMPLATE.to_string())
            .expect("Failed to add carousel template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(template)?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  {% if noindex %}<meta name="robots" content="noindex">
  {% endif %}<meta http-equiv="X-UA-Compatible" content="IE=edge">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}<title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/site.css">
</head>
<body>
  {% include "header.html" %}
  <main class="container">
    {% block content %}{% endblock %}
  </main>
  {% if carousel %}<script src="{{ base_url }}assets/carousel.js"></script>
  {% endif %}{% if live_reload %}<script src="/__reload.js"></script>
  {% endif %}
</body>
</html>"##;

const HEADER_TEMPLATE: &str = r##"<header class="site-header">
  <nav class="nav-container">
    <div class="nav-brand">
      <a href="{{ base_url }}">{{ brand }}</a>
    </div>
    <ul class="nav-menu">
    {% for item in nav %}
      <li>{{ item.anchor | safe }}</li>
    {% endfor %}
    </ul>
  </nav>
</header>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% if hero %}
<div class="hero">
  <h1>{{ hero.title }}</h1>
  {% if hero.subtitle %}<p class="subtitle">{{ hero.subtitle }}</p>{% endif %}
  {% if hero.image %}<img src="{{ hero.image }}" alt="{{ hero.title }}">{% endif %}
</div>
{% endif %}
{% if carousel %}{% include "carousel.html" %}{% endif %}
<div class="content">
  {{ content | safe }}
</div>
{% endblock %}"##;

const CAROUSEL_TEMPLATE: &str = r##"{% set view = carousel.view %}
{% if view %}
<div class="carousel-container" data-carousel data-interval="{{ carousel.interval_ms }}" data-autoplay="{{ carousel.auto_play_on_load }}">
  <div class="carousel">
    <button class="carousel-button prev" data-action="previous" aria-label="{{ view.previous_label }}">&lsaquo;</button>
    <div class="carousel-content" data-action="open" style="cursor: pointer">
      <img src="{{ view.slide.source }}" alt="{{ view.slide.alt_text }}" class="carousel-image">
      <div class="carousel-caption">{{ view.slide.caption }}</div>
    </div>
    <button class="carousel-button next" data-action="next" aria-label="{{ view.next_label }}">&rsaquo;</button>
  </div>
  <div class="carousel-indicators">
  {% for indicator in view.indicators %}
    <button class="indicator{% if indicator.active %} active{% endif %}" data-index="{{ indicator.index }}" aria-label="{{ indicator.label }}"></button>
  {% endfor %}
  </div>
  <div class="carousel-controls">
    <button class="control-button" data-action="toggle">{{ view.toggle_label }}</button>
    <p class="image-count">{{ view.count }}</p>
  </div>
</div>
<div class="lightbox-overlay"{% if not view.lightbox %} hidden{% endif %}>
  <button class="lightbox-close" aria-label="{{ view.close_label }}">&times;</button>
  <div class="lightbox-content">
    <img src="{{ view.slide.source }}" alt="{{ view.slide.alt_text }}" class="lightbox-image">
    <div class="lightbox-caption">{{ view.slide.caption }}</div>
  </div>
  <button class="lightbox-nav lightbox-prev" aria-label="{{ view.previous_label }}">&lsaquo;</button>
  <button class="lightbox-nav lightbox-next" aria-label="{{ view.next_label }}">&rsaquo;</button>
</div>
<script type="application/json" id="carousel-images">{{ carousel.images_json | safe }}</script>
{% else %}
<section class="info-section">
  <h2>No Images Found</h2>
  <p>
    Add image files ({% for ext in carousel.extensions %}.{{ ext }}{% if not loop.last %}, {% endif %}{% endfor %}) to the <code>{{ carousel.images_dir }}/</code> folder
    to see them in the carousel.
  </p>
</section>
{% endif %}"##;
