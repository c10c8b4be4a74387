//! Terminal host for the carousel.
//!
//! Reads one command per line from stdin and drives the widget with the
//! same events a browser would send. A ticker feeds elapsed time so
//! auto-play advances while waiting for input.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};

use marquee_carousel::{
    CarouselConfig, CarouselWidget, Document, Key, LightboxTarget, WidgetEvent,
};
use marquee_static::{DirectoryProvider, ImageListProvider, ManifestProvider};

use crate::config::load_config;

const TICK: Duration = Duration::from_millis(100);

const HELP: &str = "commands: n/next, p/prev, 1..N, space/toggle, o/open, c/close, b/backdrop, esc, q/quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(WidgetEvent),
    Help,
    Quit,
}

/// Parse one line of input. Returns `None` for unknown commands.
fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        // A bare space toggles, like the space bar
        return line
            .contains(' ')
            .then_some(Command::Event(WidgetEvent::ToggleAutoPlay));
    }

    let event = match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "h" | "help" | "?" => return Some(Command::Help),
        "n" | "next" => WidgetEvent::Next,
        "p" | "prev" | "previous" => WidgetEvent::Previous,
        "space" | "t" | "toggle" => WidgetEvent::ToggleAutoPlay,
        "o" | "open" => WidgetEvent::SlideClicked,
        "c" | "close" => WidgetEvent::LightboxClick(LightboxTarget::CloseButton),
        "b" | "backdrop" => WidgetEvent::LightboxClick(LightboxTarget::Backdrop),
        "esc" | "escape" => WidgetEvent::KeyDown(Key::Escape),
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => WidgetEvent::Indicator(n - 1),
            _ => return None,
        },
    };

    Some(Command::Event(event))
}

/// One-line summary of what the widget shows.
fn status_line(widget: &CarouselWidget) -> String {
    let Some(view) = widget.view() else {
        return "No images found".to_string();
    };

    let mut line = format!("{}  {}", view.count, view.slide.caption);
    if view.is_auto_playing {
        line.push_str("  [playing]");
    }
    if view.lightbox.is_some() {
        line.push_str("  [lightbox]");
    }
    line
}

/// Run the play command.
pub async fn run(
    config_path: &Path,
    interval_ms: Option<u64>,
    auto_play: bool,
    manifest: Option<PathBuf>,
) -> Result<()> {
    let site = load_config(config_path)?;
    let settings = site.image_settings();

    let provider: Box<dyn ImageListProvider> = match manifest {
        Some(path) => Box::new(ManifestProvider::new(path, settings)),
        None => Box::new(DirectoryProvider::new(settings)),
    };
    let images = provider.images();

    let config = CarouselConfig::from_millis(
        interval_ms.unwrap_or(site.slideshow.interval_ms),
        auto_play || site.slideshow.auto_play_on_load,
    );

    let document = Document::new();
    let mut widget = CarouselWidget::mount(images, config, &document)?;

    tracing::info!("{}", HELP);
    tracing::info!("{}", status_line(&widget));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            now = ticker.tick() => {
                let before = widget.carousel().current_index();
                widget.dispatch(WidgetEvent::Tick(now - last_tick))?;
                last_tick = now;

                if widget.carousel().current_index() != before {
                    tracing::info!("{}", status_line(&widget));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => tracing::info!("{}", HELP),
                    Some(Command::Event(event)) => match widget.dispatch(event) {
                        Ok(()) => tracing::info!("{}", status_line(&widget)),
                        Err(e) => tracing::warn!("{}", e),
                    },
                    None => tracing::warn!("Unknown command {:?}. {}", line.trim(), HELP),
                }
            }
        }
    }

    widget.unmount();
    tracing::debug!(
        "Scroll lock released: {}, key listeners: {}",
        !document.is_scroll_locked(),
        document.key_listener_count()
    );

    Ok(())
}
