//! Asset pipeline for the site stylesheet and the carousel runtime.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site stylesheet.
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Generate the browser runtime that drives server-rendered carousels.
    pub fn generate_carousel_js() -> String {
        CAROUSEL_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const SITE_CSS: &str = r#"/* marquee site theme */

:root {
  --background: #0f0f10;
  --foreground: #f4f4f5;
  --muted: #1c1c1f;
  --muted-foreground: #a1a1aa;
  --accent: #f7931a;
  --border: #2e2e33;
  --radius: 0.5rem;
  --content-max-width: 960px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

/* Shared header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--muted);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 1rem 1.5rem;
}

.nav-brand a {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--foreground);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--muted-foreground);
  text-decoration: none;
  transition: color 0.15s;
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

/* Page */
.container {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.hero {
  text-align: center;
  margin-bottom: 2rem;
}

.hero h1 {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

.hero img {
  max-width: 100%;
  border-radius: var(--radius);
  margin-top: 1rem;
}

.subtitle {
  color: var(--muted-foreground);
}

.content h2 {
  margin: 2rem 0 1rem;
}

.content p,
.content ul {
  margin-bottom: 1rem;
}

.content ul {
  padding-left: 1.5rem;
}

.content a {
  color: var(--accent);
}

.info-section {
  background: var(--muted);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

/* Carousel */
.carousel-container {
  margin-bottom: 2rem;
}

.carousel {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.carousel-content {
  flex: 1;
  text-align: center;
}

.carousel-image {
  max-width: 100%;
  max-height: 60vh;
  border-radius: var(--radius);
}

.carousel-caption,
.lightbox-caption {
  margin-top: 0.5rem;
  color: var(--muted-foreground);
}

.carousel-button,
.lightbox-nav,
.lightbox-close {
  background: rgba(0, 0, 0, 0.5);
  color: var(--foreground);
  border: none;
  border-radius: 50%;
  width: 2.75rem;
  height: 2.75rem;
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

.carousel-button:hover,
.lightbox-nav:hover,
.lightbox-close:hover {
  background: var(--accent);
}

.carousel-indicators {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.indicator {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  border: none;
  background: var(--border);
  cursor: pointer;
}

.indicator.active {
  background: var(--accent);
}

.carousel-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  margin-top: 1rem;
}

.control-button {
  background: var(--accent);
  color: var(--background);
  border: none;
  border-radius: var(--radius);
  padding: 0.5rem 1rem;
  font-weight: 600;
  cursor: pointer;
}

.image-count {
  color: var(--muted-foreground);
}

/* Lightbox */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.9);
}

.lightbox-overlay[hidden] {
  display: none;
}

.lightbox-content {
  max-width: 90vw;
  max-height: 90vh;
  text-align: center;
}

.lightbox-image {
  max-width: 90vw;
  max-height: 80vh;
}

.lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.lightbox-prev {
  position: absolute;
  left: 1rem;
}

.lightbox-next {
  position: absolute;
  right: 1rem;
}

@media (max-width: 640px) {
  .nav-container {
    flex-direction: column;
    gap: 0.5rem;
  }

  .hero h1 {
    font-size: 1.75rem;
  }
}
"#;

// Mirrors marquee_carousel::CarouselWidget for the browser.
const CAROUSEL_JS: &str = r#"// marquee carousel runtime
(function() {
  'use strict';

  const root = document.querySelector('[data-carousel]');
  const dataEl = document.getElementById('carousel-images');
  if (!root || !dataEl) return;

  const images = JSON.parse(dataEl.textContent || '[]');
  if (images.length === 0) return;

  const interval = parseInt(root.dataset.interval, 10) || 2000;
  const overlay = document.querySelector('.lightbox-overlay');

  const state = {
    index: 0,
    autoPlaying: root.dataset.autoplay === 'true',
    lightboxOpen: false,
  };
  let timer = null;

  function rearm() {
    if (timer !== null) {
      clearInterval(timer);
      timer = null;
    }
    if (state.autoPlaying && images.length > 1) {
      timer = setInterval(function() {
        state.index = (state.index + 1) % images.length;
        render();
      }, interval);
    }
  }

  function setAutoPlay(on) {
    if (state.autoPlaying !== on) {
      state.autoPlaying = on;
      rearm();
    }
  }

  function next() {
    state.index = (state.index + 1) % images.length;
    setAutoPlay(false);
    render();
  }

  function previous() {
    state.index = state.index === 0 ? images.length - 1 : state.index - 1;
    setAutoPlay(false);
    render();
  }

  function goTo(index) {
    if (index < 0 || index >= images.length) return;
    state.index = index;
    setAutoPlay(false);
    render();
  }

  function openLightbox() {
    state.lightboxOpen = true;
    setAutoPlay(false);
    render();
  }

  function closeLightbox() {
    if (!state.lightboxOpen) return;
    state.lightboxOpen = false;
    render();
  }

  function showSlide(img, caption, image) {
    img.src = image.source;
    img.alt = image.alt_text;
    caption.textContent = image.caption;
  }

  function render() {
    const image = images[state.index];
    showSlide(root.querySelector('.carousel-image'), root.querySelector('.carousel-caption'), image);

    root.querySelectorAll('.indicator').forEach(function(el, i) {
      el.classList.toggle('active', i === state.index);
    });

    root.querySelector('[data-action="toggle"]').textContent =
      (state.autoPlaying ? 'Pause' : 'Play') + ' Slideshow';
    root.querySelector('.image-count').textContent =
      (state.index + 1) + ' / ' + images.length + ' images';

    if (overlay) {
      overlay.hidden = !state.lightboxOpen;
      showSlide(overlay.querySelector('.lightbox-image'), overlay.querySelector('.lightbox-caption'), image);
    }

    document.body.style.overflow = state.lightboxOpen ? 'hidden' : 'unset';
  }

  root.querySelector('[data-action="previous"]').addEventListener('click', previous);
  root.querySelector('[data-action="next"]').addEventListener('click', next);
  root.querySelector('[data-action="open"]').addEventListener('click', openLightbox);
  root.querySelector('[data-action="toggle"]').addEventListener('click', function() {
    setAutoPlay(!state.autoPlaying);
    render();
  });
  root.querySelectorAll('.indicator').forEach(function(el) {
    el.addEventListener('click', function() {
      goTo(parseInt(el.dataset.index, 10));
    });
  });

  if (overlay) {
    overlay.addEventListener('click', closeLightbox);
    overlay.querySelector('.lightbox-close').addEventListener('click', function(e) {
      e.stopPropagation();
      closeLightbox();
    });
    overlay.querySelector('.lightbox-content').addEventListener('click', function(e) {
      e.stopPropagation();
    });
    overlay.querySelector('.lightbox-prev').addEventListener('click', function(e) {
      e.stopPropagation();
      previous();
    });
    overlay.querySelector('.lightbox-next').addEventListener('click', function(e) {
      e.stopPropagation();
      next();
    });
  }

  function onKeyDown(e) {
    if (e.key === 'Escape' && state.lightboxOpen) closeLightbox();
  }
  window.addEventListener('keydown', onKeyDown);

  window.addEventListener('pagehide', function() {
    setAutoPlay(false);
    window.removeEventListener('keydown', onKeyDown);
    document.body.style.overflow = 'unset';
  });

  rearm();
  render();
})();
"#;
