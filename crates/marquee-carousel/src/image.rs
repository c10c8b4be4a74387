//! Image descriptors supplied by the host.

use serde::{Deserialize, Serialize};

/// One slide in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// URL or path of the image asset
    pub source: String,

    /// Accessibility label
    pub alt_text: String,

    /// Display text shown under the image
    pub caption: String,
}

impl ImageDescriptor {
    /// Create a descriptor.
    pub fn new(
        source: impl Into<String>,
        alt_text: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
            caption: caption.into(),
        }
    }

    /// Create a descriptor whose alt text is the caption.
    pub fn captioned(source: impl Into<String>, caption: impl Into<String>) -> Self {
        let caption = caption.into();
        Self {
            source: source.into(),
            alt_text: caption.clone(),
            caption,
        }
    }
}
