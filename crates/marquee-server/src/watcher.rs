//! File watching for rebuild on change.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Page source was modified
    PageModified(PathBuf),

    /// Carousel image was added, removed or replaced
    ImageChanged(PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Generic modification
    Modified(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::PageModified(p)
            | WatchEvent::ImageChanged(p)
            | WatchEvent::Created(p)
            | WatchEvent::Deleted(p)
            | WatchEvent::Modified(p) => p,
        }
    }
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Files whose extension is in `image_extensions` are reported as
    /// [`WatchEvent::ImageChanged`]. Returns the watcher and a channel to
    /// receive events.
    pub fn new(
        paths: &[PathBuf],
        image_extensions: &[String],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in watch_roots(paths) {
            watcher
                .watch(&path, RecursiveMode::Recursive)
                .map_err(std::io::Error::other)?;
            tracing::debug!("Watching {}", path.display());
        }

        let image_extensions = image_extensions.to_vec();
        std::thread::spawn(move || {
            let mut last_event_time = std::time::Instant::now();
            let debounce_duration = Duration::from_millis(100);

            while let Ok(event) = sync_rx.recv() {
                // Debounce rapid events
                let now = std::time::Instant::now();
                if now.duration_since(last_event_time) < debounce_duration {
                    continue;
                }
                last_event_time = now;

                for path in event.paths {
                    if let Some(e) = classify_event(&path, &event.kind, &image_extensions) {
                        if async_tx.blocking_send(e).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Existing paths to watch, without paths nested inside another root.
fn watch_roots(paths: &[PathBuf]) -> Vec<PathBuf> {
    let existing: Vec<&PathBuf> = paths.iter().filter(|p| p.exists()).collect();

    let mut roots: Vec<PathBuf> = Vec::new();
    for path in &existing {
        let nested = existing
            .iter()
            .any(|other| other != path && path.starts_with(other));
        if !nested && !roots.contains(*path) {
            roots.push(path.to_path_buf());
        }
    }
    roots
}

/// Classify a notify event into a WatchEvent.
fn classify_event(
    path: &Path,
    kind: &notify::EventKind,
    image_extensions: &[String],
) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let is_image = image_extensions.iter().any(|e| e.eq_ignore_ascii_case(ext));

    match kind {
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_) if is_image => {
            Some(WatchEvent::ImageChanged(path.to_path_buf()))
        }
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => {
            if matches!(ext, "md" | "markdown" | "html" | "htm") {
                Some(WatchEvent::PageModified(path.to_path_buf()))
            } else {
                Some(WatchEvent::Modified(path.to_path_buf()))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    fn extensions() -> Vec<String> {
        vec!["jpg".to_string(), "png".to_string()]
    }

    #[test]
    fn classifies_events() {
        let exts = extensions();

        assert_eq!(
            classify_event(Path::new("pages/index.md"), &EventKind::Modify(ModifyKind::Any), &exts),
            Some(WatchEvent::PageModified(PathBuf::from("pages/index.md")))
        );
        assert_eq!(
            classify_event(Path::new("images/a.JPG"), &EventKind::Remove(RemoveKind::File), &exts),
            Some(WatchEvent::ImageChanged(PathBuf::from("images/a.JPG")))
        );
        assert_eq!(
            classify_event(Path::new("public/robots.txt"), &EventKind::Create(CreateKind::File), &exts),
            Some(WatchEvent::Created(PathBuf::from("public/robots.txt")))
        );
        assert_eq!(
            classify_event(Path::new("public/robots.txt"), &EventKind::Access(notify::event::AccessKind::Any), &exts),
            None
        );
    }

    #[test]
    fn skips_nested_and_missing_roots() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        let images = public.join("images");
        fs::create_dir_all(&images).unwrap();

        let roots = watch_roots(&[images.clone(), public.clone(), temp.path().join("missing")]);

        assert_eq!(roots, vec![public]);
    }

    #[tokio::test]
    async fn watches_file_changes() {
        let temp = tempdir().unwrap();
        let test_file = temp.path().join("index.md");

        // Create the watcher first so it sees the creation
        let (watcher, mut rx) =
            FileWatcher::new(&[temp.path().to_path_buf()], &extensions()).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&test_file, "# Created").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for file watch event");
        assert!(event.unwrap().is_some(), "channel should not be closed");
    }
}
