//! Events posted back onto the event loop.

use std::time::Duration;
use tao::event_loop::EventLoopProxy;
use tracing::warn;
use uhr_shell::{DeferredScheduler, DeferredTask};

/// User events for the clock event loop
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// Drag overlay was pressed
    StartDrag,
    /// Deferred repaint workaround after leaving fullscreen
    RedrawNudge,
    /// Clock document finished loading
    ContentLoaded,
    /// A protocol request failed
    ContentFailed { document: bool, reason: String },
    /// Application menu item activated
    Menu(String),
}

impl From<DeferredTask> for UserEvent {
    fn from(task: DeferredTask) -> Self {
        match task {
            DeferredTask::RedrawNudge => UserEvent::RedrawNudge,
        }
    }
}

/// Runs deferred shell tasks by sleeping on a helper thread and posting the
/// task back to the event loop.
pub struct ProxyScheduler {
    proxy: EventLoopProxy<UserEvent>,
}

impl ProxyScheduler {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self { proxy }
    }
}

impl DeferredScheduler for ProxyScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask) {
        let proxy = self.proxy.clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            if proxy.send_event(task.into()).is_err() {
                warn!("Event loop closed before {:?} ran", task);
            }
        });
    }
}
