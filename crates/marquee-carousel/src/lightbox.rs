//! Lightbox overlay layered over a [`Carousel`].

use crate::document::{Document, Key, ScrollLock};
use crate::engine::Carousel;

/// Where a click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    /// Overlay background outside the content region
    Backdrop,
    /// The enlarged image or its caption
    Content,
    CloseButton,
    Previous,
    Next,
}

#[derive(Debug)]
enum State {
    Closed,
    Open(ScrollLock),
}

/// Full-screen view of the carousel's current slide.
///
/// The open state owns the document scroll lock, so leaving it by any path
/// restores scrolling.
#[derive(Debug)]
pub struct Lightbox {
    state: State,
    document: Document,
}

impl Lightbox {
    /// Create a closed lightbox bound to `document`.
    pub fn new(document: &Document) -> Self {
        Self {
            state: State::Closed,
            document: document.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Open the overlay and stop auto-play.
    pub fn open(&mut self, carousel: &mut Carousel) {
        carousel.stop_auto_play();
        if !self.is_open() {
            self.state = State::Open(self.document.lock_scroll());
            tracing::debug!(index = carousel.current_index(), "Lightbox opened");
        }
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        if self.is_open() {
            self.state = State::Closed;
            tracing::debug!("Lightbox closed");
        }
    }

    /// Handle a key press. Returns whether it changed anything.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Escape if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Handle a click inside the overlay.
    ///
    /// Navigation buttons stop propagation, so they never reach the
    /// backdrop. Content clicks are swallowed.
    pub fn click(&mut self, target: LightboxTarget, carousel: &mut Carousel) {
        if !self.is_open() {
            return;
        }

        match target {
            LightboxTarget::Backdrop | LightboxTarget::CloseButton => self.close(),
            LightboxTarget::Content => {}
            LightboxTarget::Previous => carousel.previous(),
            LightboxTarget::Next => carousel.next(),
        }
    }
}
