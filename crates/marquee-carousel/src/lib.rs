//! Headless image carousel with a lightbox overlay.
//!
//! The widget owns slide position, auto-play timing, modal state and the
//! document side effects that go with it (scroll lock, key listener). It
//! renders nothing itself: hosts read a [`CarouselView`] and feed
//! [`WidgetEvent`]s back in.

pub mod document;
pub mod engine;
pub mod image;
pub mod lightbox;
pub mod timer;
pub mod view;
pub mod widget;

pub use document::{Document, Key, KeyListener, ScrollLock};
pub use engine::{Carousel, CarouselConfig, CarouselError, DEFAULT_INTERVAL};
pub use image::ImageDescriptor;
pub use lightbox::{Lightbox, LightboxTarget};
pub use timer::AutoPlayTimer;
pub use view::{CarouselView, IndicatorView, SlideView};
pub use widget::{CarouselWidget, WidgetEvent};
