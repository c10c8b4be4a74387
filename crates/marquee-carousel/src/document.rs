//! Host document state shared by widgets: scroll lock and key listeners.
//!
//! Both are reference counted. A widget holds a guard for as long as it
//! needs the resource and the count drops when the guard is dropped, so a
//! widget torn down while its lightbox is open cannot leave the page
//! locked.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct DocumentState {
    scroll_locks: Cell<usize>,
    key_listeners: Cell<usize>,
}

/// Handle to the host document. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Rc<DocumentState>,
}

impl Document {
    /// Create a fresh document with scrolling enabled and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether page scrolling is currently disabled.
    pub fn is_scroll_locked(&self) -> bool {
        self.state.scroll_locks.get() > 0
    }

    /// Body overflow style implied by the lock state.
    pub fn overflow(&self) -> &'static str {
        if self.is_scroll_locked() {
            "hidden"
        } else {
            "unset"
        }
    }

    /// Disable page scrolling until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLock {
        increment(&self.state.scroll_locks);
        ScrollLock {
            state: Rc::clone(&self.state),
        }
    }

    /// Number of registered key listeners.
    pub fn key_listener_count(&self) -> usize {
        self.state.key_listeners.get()
    }

    /// Register a global key listener until the returned guard is dropped.
    pub fn listen_keys(&self) -> KeyListener {
        increment(&self.state.key_listeners);
        KeyListener {
            state: Rc::clone(&self.state),
        }
    }
}

fn increment(count: &Cell<usize>) {
    count.set(count.get() + 1);
}

fn decrement(count: &Cell<usize>) {
    count.set(count.get().saturating_sub(1));
}

/// Holds the page scroll lock.
pub struct ScrollLock {
    state: Rc<DocumentState>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        decrement(&self.state.scroll_locks);
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("locks", &self.state.scroll_locks.get())
            .finish()
    }
}

/// Keeps a global key listener registered.
pub struct KeyListener {
    state: Rc<DocumentState>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        decrement(&self.state.key_listeners);
    }
}

impl fmt::Debug for KeyListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListener")
            .field("listeners", &self.state.key_listeners.get())
            .finish()
    }
}

/// A key press delivered to a key listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }
}
