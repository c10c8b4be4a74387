//! Carousel engine: slide position, navigation and auto-play.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::image::ImageDescriptor;
use crate::timer::AutoPlayTimer;

/// Default auto-play period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Host-supplied carousel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-play period
    pub interval: Duration,

    /// Start auto-playing as soon as the carousel is mounted
    pub auto_play_on_load: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            auto_play_on_load: false,
        }
    }
}

impl CarouselConfig {
    /// Build a config from a millisecond interval.
    pub fn from_millis(interval_ms: u64, auto_play_on_load: bool) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            auto_play_on_load,
        }
    }
}

/// Errors raised by carousel operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("Slide index {index} is out of range for {len} images")]
    InvalidIndex { index: usize, len: usize },

    #[error("Auto-play interval must be greater than zero")]
    InvalidInterval,
}

/// Carousel state over a fixed, ordered image list.
///
/// `current_index` is always `< images.len()` when the list is non-empty.
/// At most one [`AutoPlayTimer`] exists at a time; it is armed only while
/// auto-play is on, the list has more than one image and the carousel has
/// not been torn down.
#[derive(Debug)]
pub struct Carousel {
    images: Vec<ImageDescriptor>,
    current_index: usize,
    is_auto_playing: bool,
    interval: Duration,
    timer: Option<AutoPlayTimer>,
    generation: u64,
    torn_down: bool,
}

impl Carousel {
    /// Create a carousel over `images`.
    pub fn new(images: Vec<ImageDescriptor>, config: CarouselConfig) -> Result<Self, CarouselError> {
        if config.interval.is_zero() {
            return Err(CarouselError::InvalidInterval);
        }

        let mut carousel = Self {
            images,
            current_index: 0,
            is_auto_playing: config.auto_play_on_load,
            interval: config.interval,
            timer: None,
            generation: 0,
            torn_down: false,
        };
        carousel.rearm();

        Ok(carousel)
    }

    /// All slides in display order.
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the slide on display.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Slide on display, if any.
    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.current_index)
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The armed auto-play timer, if any.
    pub fn timer(&self) -> Option<&AutoPlayTimer> {
        self.timer.as_ref()
    }

    /// Move to the next slide, wrapping at the end. Cancels auto-play.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.step(1);
        self.set_auto_play(false);
    }

    /// Move to the previous slide, wrapping at the start. Cancels auto-play.
    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_index = if self.current_index == 0 {
            self.len() - 1
        } else {
            self.current_index - 1
        };
        self.set_auto_play(false);
    }

    /// Jump to `index`. Cancels auto-play.
    ///
    /// Out-of-range indices fail without touching any state.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        self.current_index = index;
        self.set_auto_play(false);
        Ok(())
    }

    /// Flip auto-play on or off.
    pub fn toggle_auto_play(&mut self) {
        self.set_auto_play(!self.is_auto_playing);
    }

    /// Turn auto-play off without moving.
    pub fn stop_auto_play(&mut self) {
        self.set_auto_play(false);
    }

    /// Change the auto-play period. Re-arms a running timer.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::InvalidInterval);
        }
        if interval != self.interval {
            self.interval = interval;
            self.rearm();
        }
        Ok(())
    }

    /// Feed elapsed time to the auto-play timer.
    ///
    /// Each firing advances one slide without cancelling auto-play.
    /// Returns the number of slides advanced.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };

        let fired = timer.advance(elapsed);
        if fired > 0 {
            self.step(fired);
            tracing::debug!(
                fired,
                index = self.current_index,
                "Auto-play advanced carousel"
            );
        }
        fired
    }

    /// Cancel the timer for good. Later toggles never re-arm it.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.rearm();
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn step(&mut self, by: u64) {
        let len = self.len() as u64;
        self.current_index = ((self.current_index as u64 + by % len) % len) as usize;
    }

    fn set_auto_play(&mut self, on: bool) {
        if self.is_auto_playing != on {
            self.is_auto_playing = on;
            self.rearm();
        }
    }

    /// Cancel any armed timer, then arm a new one if auto-play should run.
    fn rearm(&mut self) {
        if let Some(old) = self.timer.take() {
            tracing::debug!(generation = old.generation(), "Cancelled auto-play timer");
        }

        if self.is_auto_playing && self.len() > 1 && !self.torn_down {
            self.generation += 1;
            self.timer = Some(AutoPlayTimer::arm(self.interval, self.generation));
            tracing::debug!(
                generation = self.generation,
                interval_ms = self.interval.as_millis() as u64,
                "Armed auto-play timer"
            );
        }
    }
}
