//! Window notifications and their handlers.
//!
//! Each notification has its own list of closures. The shell registers its
//! background handlers at construction; the application may add more.

use std::collections::HashMap;
use std::time::Duration;

/// Window-system notification observed by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellNotification {
    EnteredFullscreen,
    ExitedFullscreen,
    ScreenChanged,
}

impl ShellNotification {
    pub const ALL: [ShellNotification; 3] = [
        ShellNotification::EnteredFullscreen,
        ShellNotification::ExitedFullscreen,
        ShellNotification::ScreenChanged,
    ];
}

/// State handed to notification handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationContext {
    pub notification: ShellNotification,
    pub fullscreen: bool,
}

pub type Handler<W> = Box<dyn Fn(&W, &NotificationContext)>;

/// Per-notification handler lists.
pub struct Dispatcher<W> {
    handlers: HashMap<ShellNotification, Vec<Handler<W>>>,
}

impl<W> Default for Dispatcher<W> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<W> Dispatcher<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, notification: ShellNotification, handler: Handler<W>) {
        self.handlers.entry(notification).or_default().push(handler);
    }

    /// Run the handlers for `ctx.notification` in registration order.
    pub fn dispatch(&self, window: &W, ctx: &NotificationContext) {
        if let Some(handlers) = self.handlers.get(&ctx.notification) {
            for handler in handlers {
                handler(window, ctx);
            }
        }
    }
}

/// Work the shell defers to later on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    RedrawNudge,
}

/// Runs a task once after a delay, back on the UI thread.
pub trait DeferredScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask);
}

/// What the current platform needs from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellCapabilities {
    /// The web view does not repaint after leaving fullscreen until the
    /// window size changes.
    pub needs_redraw_nudge: bool,
    pub redraw_nudge_delay: Duration,
    /// A hidden window can be brought back (dock reopen, app menu).
    pub supports_reopen: bool,
}

impl Default for ShellCapabilities {
    fn default() -> Self {
        Self {
            needs_redraw_nudge: false,
            redraw_nudge_delay: Duration::from_millis(500),
            supports_reopen: false,
        }
    }
}
