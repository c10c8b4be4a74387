//! Render model for the carousel.
//!
//! Views are plain data. Templates, terminal output and tests all read the
//! same struct, so labels live here and nowhere else.

use serde::Serialize;

use crate::image::ImageDescriptor;
use crate::widget::CarouselWidget;

pub const PREVIOUS_LABEL: &str = "Previous image";
pub const NEXT_LABEL: &str = "Next image";
pub const CLOSE_LABEL: &str = "Close lightbox";

/// Image shown in the carousel or the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideView {
    pub source: String,
    pub alt_text: String,
    pub caption: String,
}

impl From<&ImageDescriptor> for SlideView {
    fn from(image: &ImageDescriptor) -> Self {
        Self {
            source: image.source.clone(),
            alt_text: image.alt_text.clone(),
            caption: image.caption.clone(),
        }
    }
}

/// One indicator control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorView {
    /// Zero-based slide index the control jumps to
    pub index: usize,
    /// Accessible label, numbered from 1
    pub label: String,
    pub active: bool,
}

/// Everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub slide: SlideView,
    pub indicators: Vec<IndicatorView>,
    pub is_auto_playing: bool,
    /// "Play Slideshow" or "Pause Slideshow"
    pub toggle_label: String,
    /// "{n} / {len} images"
    pub count: String,
    /// Present only while the lightbox is open
    pub lightbox: Option<SlideView>,
    pub previous_label: &'static str,
    pub next_label: &'static str,
    pub close_label: &'static str,
}

impl CarouselView {
    /// Build the view for `widget`. Returns `None` for an empty image list,
    /// which renders no slide and no controls.
    pub fn of(widget: &CarouselWidget) -> Option<Self> {
        let carousel = widget.carousel();
        let current = carousel.current()?;
        let index = carousel.current_index();

        let indicators = (0..carousel.len())
            .map(|i| IndicatorView {
                index: i,
                label: format!("Go to image {}", i + 1),
                active: i == index,
            })
            .collect();

        let toggle_label = if carousel.is_auto_playing() {
            "Pause Slideshow"
        } else {
            "Play Slideshow"
        };

        Some(Self {
            slide: SlideView::from(current),
            indicators,
            is_auto_playing: carousel.is_auto_playing(),
            toggle_label: toggle_label.to_string(),
            count: format!("{} / {} images", index + 1, carousel.len()),
            lightbox: widget
                .lightbox()
                .is_open()
                .then(|| SlideView::from(current)),
            previous_label: PREVIOUS_LABEL,
            next_label: NEXT_LABEL,
            close_label: CLOSE_LABEL,
        })
    }
}
