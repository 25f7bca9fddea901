//! Platform window seam
//!
//! The shell drives the native window only through this trait, so the resize
//! and fullscreen logic can run against an in-memory window in tests.

use crate::appearance::Appearance;
use uhr_core::{FrameSize, ScreenBounds};

/// Native window operations needed by the shell.
///
/// All calls happen on the UI thread. Sizes are logical points.
pub trait ShellWindow {
    /// Current inner size.
    fn inner_size(&self) -> FrameSize;

    /// Request a new inner size.
    fn set_inner_size(&self, size: FrameSize);

    /// Smallest size the user can resize to.
    fn set_min_inner_size(&self, size: FrameSize);

    /// Bounds of the screen currently hosting the window.
    ///
    /// Where the platform only reports the full monitor size this can
    /// overlap the menu bar or dock.
    fn screen_bounds(&self) -> Option<ScreenBounds>;

    /// Stable identifier of the hosting screen, used to detect screen changes.
    fn screen_id(&self) -> Option<String>;

    /// Whether the window is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Paint the window background.
    fn apply_appearance(&self, appearance: Appearance);

    /// Begin a native drag-to-move with the pointer currently down.
    fn start_drag(&self);

    fn set_visible(&self, visible: bool);
}

impl<T: ShellWindow + ?Sized> ShellWindow for std::rc::Rc<T> {
    fn inner_size(&self) -> FrameSize {
        (**self).inner_size()
    }

    fn set_inner_size(&self, size: FrameSize) {
        (**self).set_inner_size(size)
    }

    fn set_min_inner_size(&self, size: FrameSize) {
        (**self).set_min_inner_size(size)
    }

    fn screen_bounds(&self) -> Option<ScreenBounds> {
        (**self).screen_bounds()
    }

    fn screen_id(&self) -> Option<String> {
        (**self).screen_id()
    }

    fn is_fullscreen(&self) -> bool {
        (**self).is_fullscreen()
    }

    fn apply_appearance(&self, appearance: Appearance) {
        (**self).apply_appearance(appearance)
    }

    fn start_drag(&self) {
        (**self).start_drag()
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible)
    }
}
