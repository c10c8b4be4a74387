//! Mounted carousel + lightbox pair and its event dispatch.

use std::time::Duration;

use crate::document::{Document, Key, KeyListener};
use crate::engine::{Carousel, CarouselConfig, CarouselError};
use crate::image::ImageDescriptor;
use crate::lightbox::{Lightbox, LightboxTarget};
use crate::view::CarouselView;

/// User interaction or timer input delivered to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Carousel "Previous image" button
    Previous,
    /// Carousel "Next image" button
    Next,
    /// Indicator for the given zero-based slide
    Indicator(usize),
    /// Play/pause button
    ToggleAutoPlay,
    /// Click on the carousel image or caption
    SlideClicked,
    /// Click inside the open lightbox overlay
    LightboxClick(LightboxTarget),
    /// Key press seen by the global key listener
    KeyDown(Key),
    /// Time elapsed since the previous tick
    Tick(Duration),
}

/// A carousel and its lightbox mounted into a document.
///
/// Mounting registers a key listener. [`CarouselWidget::unmount`] releases
/// the listener, the scroll lock and the auto-play timer; dropping a
/// mounted widget unmounts it.
#[derive(Debug)]
pub struct CarouselWidget {
    carousel: Carousel,
    lightbox: Lightbox,
    key_listener: Option<KeyListener>,
}

impl CarouselWidget {
    /// Mount a widget over `images`.
    pub fn mount(
        images: Vec<ImageDescriptor>,
        config: CarouselConfig,
        document: &Document,
    ) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(images, config)?;
        tracing::debug!(
            images = carousel.len(),
            auto_play = carousel.is_auto_playing(),
            "Mounted carousel"
        );

        Ok(Self {
            carousel,
            lightbox: Lightbox::new(document),
            key_listener: Some(document.listen_keys()),
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn is_mounted(&self) -> bool {
        self.key_listener.is_some()
    }

    /// Current render model, or `None` when there is nothing to show.
    pub fn view(&self) -> Option<CarouselView> {
        CarouselView::of(self)
    }

    /// Apply a host configuration change.
    pub fn configure(&mut self, config: CarouselConfig) -> Result<(), CarouselError> {
        self.carousel.set_interval(config.interval)
    }

    /// Apply one event.
    ///
    /// Events after unmount are ignored. Only an out-of-range indicator is
    /// an error.
    pub fn dispatch(&mut self, event: WidgetEvent) -> Result<(), CarouselError> {
        if !self.is_mounted() {
            tracing::debug!(?event, "Ignoring event for unmounted carousel");
            return Ok(());
        }

        match event {
            WidgetEvent::Previous => self.carousel.previous(),
            WidgetEvent::Next => self.carousel.next(),
            WidgetEvent::Indicator(index) => self.carousel.go_to(index)?,
            WidgetEvent::ToggleAutoPlay => self.carousel.toggle_auto_play(),
            WidgetEvent::SlideClicked => {
                if !self.carousel.is_empty() {
                    self.lightbox.open(&mut self.carousel);
                }
            }
            WidgetEvent::LightboxClick(target) => self.lightbox.click(target, &mut self.carousel),
            WidgetEvent::KeyDown(key) => {
                self.lightbox.handle_key(&key);
            }
            WidgetEvent::Tick(elapsed) => {
                self.carousel.advance(elapsed);
            }
        }

        Ok(())
    }

    /// Release everything the widget holds in the document.
    pub fn unmount(&mut self) {
        if self.key_listener.take().is_none() {
            return;
        }
        self.lightbox.close();
        self.carousel.teardown();
        tracing::debug!("Unmounted carousel");
    }
}

impl Drop for CarouselWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<ImageDescriptor> {
        vec![
            ImageDescriptor::captioned("/images/apple.jpg", "Apple"),
            ImageDescriptor::captioned("/images/banana.jpg", "Banana"),
            ImageDescriptor::captioned("/images/cherry.jpg", "Cherry"),
        ]
    }

    fn caption(widget: &CarouselWidget) -> String {
        widget.view().unwrap().slide.caption
    }

    #[test]
    fn mount_registers_key_listener() {
        let doc = Document::new();
        let mut widget = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();

        assert!(widget.is_mounted());
        assert_eq!(doc.key_listener_count(), 1);

        widget.unmount();
        assert!(!widget.is_mounted());
        assert_eq!(doc.key_listener_count(), 0);
    }

    #[test]
    fn fruit_scenario() {
        let doc = Document::new();
        let mut widget =
            CarouselWidget::mount(fruit(), CarouselConfig::from_millis(500, false), &doc).unwrap();
        assert_eq!(caption(&widget), "Apple");

        widget.dispatch(WidgetEvent::ToggleAutoPlay).unwrap();
        widget
            .dispatch(WidgetEvent::Tick(Duration::from_millis(500)))
            .unwrap();
        assert_eq!(caption(&widget), "Banana");
        assert_eq!(widget.carousel().current_index(), 1);

        widget.dispatch(WidgetEvent::Next).unwrap();
        assert_eq!(caption(&widget), "Cherry");
        assert!(!widget.carousel().is_auto_playing());

        widget.dispatch(WidgetEvent::Previous).unwrap();
        widget.dispatch(WidgetEvent::Previous).unwrap();
        assert_eq!(caption(&widget), "Apple");

        widget.dispatch(WidgetEvent::SlideClicked).unwrap();
        assert_eq!(widget.view().unwrap().lightbox.unwrap().caption, "Apple");
        assert!(doc.is_scroll_locked());

        widget
            .dispatch(WidgetEvent::KeyDown(Key::Escape))
            .unwrap();
        assert!(widget.view().unwrap().lightbox.is_none());
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn solo_scenario() {
        let doc = Document::new();
        let mut widget = CarouselWidget::mount(
            vec![ImageDescriptor::captioned("/images/solo.jpg", "Solo")],
            CarouselConfig::default(),
            &doc,
        )
        .unwrap();

        widget.dispatch(WidgetEvent::Next).unwrap();
        widget.dispatch(WidgetEvent::Previous).unwrap();

        assert_eq!(widget.carousel().current_index(), 0);
        assert_eq!(widget.view().unwrap().count, "1 / 1 images");
    }

    #[test]
    fn opening_lightbox_cancels_auto_play() {
        let doc = Document::new();
        let mut widget = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();

        widget.dispatch(WidgetEvent::ToggleAutoPlay).unwrap();
        widget.dispatch(WidgetEvent::SlideClicked).unwrap();
        widget
            .dispatch(WidgetEvent::LightboxClick(LightboxTarget::CloseButton))
            .unwrap();

        assert_eq!(widget.view().unwrap().toggle_label, "Play Slideshow");
    }

    #[test]
    fn escape_while_closed_is_a_no_op() {
        let doc = Document::new();
        let mut widget = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();

        widget
            .dispatch(WidgetEvent::KeyDown(Key::Escape))
            .unwrap();

        assert!(!widget.lightbox().is_open());
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn indicator_out_of_range_is_an_error() {
        let doc = Document::new();
        let mut widget = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();

        let err = widget.dispatch(WidgetEvent::Indicator(7)).unwrap_err();

        assert_eq!(err, CarouselError::InvalidIndex { index: 7, len: 3 });
    }

    #[test]
    fn unmount_while_open_restores_scroll() {
        let doc = Document::new();
        let mut widget = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();
        widget.dispatch(WidgetEvent::SlideClicked).unwrap();
        assert!(doc.is_scroll_locked());

        widget.unmount();

        assert!(!doc.is_scroll_locked());
        assert!(!widget.lightbox().is_open());
    }

    #[test]
    fn drop_while_open_restores_scroll() {
        let doc = Document::new();
        {
            let mut widget =
                CarouselWidget::mount(fruit(), CarouselConfig::from_millis(100, true), &doc)
                    .unwrap();
            widget.dispatch(WidgetEvent::SlideClicked).unwrap();
            assert!(doc.is_scroll_locked());
        }

        assert!(!doc.is_scroll_locked());
        assert_eq!(doc.key_listener_count(), 0);
    }

    #[test]
    fn events_after_unmount_are_ignored() {
        let doc = Document::new();
        let mut widget =
            CarouselWidget::mount(fruit(), CarouselConfig::from_millis(100, true), &doc).unwrap();

        widget.unmount();
        widget.dispatch(WidgetEvent::Next).unwrap();
        widget
            .dispatch(WidgetEvent::Tick(Duration::from_secs(1)))
            .unwrap();
        widget.dispatch(WidgetEvent::SlideClicked).unwrap();

        assert_eq!(widget.carousel().current_index(), 0);
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn slide_click_on_empty_list_does_not_lock() {
        let doc = Document::new();
        let mut widget =
            CarouselWidget::mount(Vec::new(), CarouselConfig::default(), &doc).unwrap();

        widget.dispatch(WidgetEvent::SlideClicked).unwrap();
        widget.dispatch(WidgetEvent::Next).unwrap();

        assert!(!doc.is_scroll_locked());
        assert!(widget.view().is_none());
    }

    #[test]
    fn configure_changes_interval() {
        let doc = Document::new();
        let mut widget =
            CarouselWidget::mount(fruit(), CarouselConfig::from_millis(1000, true), &doc).unwrap();

        widget
            .configure(CarouselConfig::from_millis(250, true))
            .unwrap();
        widget
            .dispatch(WidgetEvent::Tick(Duration::from_millis(250)))
            .unwrap();

        assert_eq!(widget.carousel().current_index(), 1);
    }

    #[test]
    fn independent_widgets_share_document_lock() {
        let doc = Document::new();
        let mut first = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();
        let mut second = CarouselWidget::mount(fruit(), CarouselConfig::default(), &doc).unwrap();

        first.dispatch(WidgetEvent::SlideClicked).unwrap();
        second.dispatch(WidgetEvent::SlideClicked).unwrap();
        first
            .dispatch(WidgetEvent::LightboxClick(LightboxTarget::Backdrop))
            .unwrap();

        assert!(doc.is_scroll_locked());

        second
            .dispatch(WidgetEvent::LightboxClick(LightboxTarget::Backdrop))
            .unwrap();
        assert!(!doc.is_scroll_locked());
        assert_eq!(first.carousel().current_index(), 0);
    }
}
