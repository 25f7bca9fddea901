//! Uhr window shell
//!
//! Keeps the clock window square and on screen, paints the background to
//! match the fullscreen state, and handles drag, close and reopen requests.

pub mod appearance;
pub mod notifications;
pub mod shell;
pub mod window;

pub use appearance::{Appearance, Rgba};
pub use notifications::{
    DeferredScheduler, DeferredTask, Dispatcher, Handler, NotificationContext, ShellCapabilities,
    ShellNotification,
};
pub use shell::{CloseAction, ResizeOutcome, WindowShell};
pub use window::ShellWindow;
