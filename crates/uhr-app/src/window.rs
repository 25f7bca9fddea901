//! tao window behind the shell's `ShellWindow` seam.

use tao::dpi::{LogicalSize, PhysicalSize};
use tao::window::{Fullscreen, Window};
use tracing::{debug, warn};
use uhr_core::{FrameSize, ScreenBounds};
use uhr_shell::{Appearance, ShellWindow};

/// The clock window.
pub struct ClockWindow {
    window: Window,
}

impl ClockWindow {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Convert a size reported by the event loop to logical points.
    pub fn logical(&self, size: PhysicalSize<u32>) -> FrameSize {
        let logical: LogicalSize<f64> = size.to_logical(self.window.scale_factor());
        FrameSize::new(logical.width, logical.height)
    }

    pub fn toggle_fullscreen(&self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
        } else {
            self.window
                .set_fullscreen(Some(Fullscreen::Borderless(self.window.current_monitor())));
        }
    }
}

impl ShellWindow for ClockWindow {
    fn inner_size(&self) -> FrameSize {
        self.logical(self.window.inner_size())
    }

    fn set_inner_size(&self, size: FrameSize) {
        self.window
            .set_inner_size(LogicalSize::new(size.width, size.height));
    }

    fn set_min_inner_size(&self, size: FrameSize) {
        self.window
            .set_min_inner_size(Some(LogicalSize::new(size.width, size.height)));
    }

    fn screen_bounds(&self) -> Option<ScreenBounds> {
        let monitor = self.window.current_monitor()?;
        let logical: LogicalSize<f64> = monitor.size().to_logical(monitor.scale_factor());
        Some(ScreenBounds::new(logical.width, logical.height))
    }

    fn screen_id(&self) -> Option<String> {
        let monitor = self.window.current_monitor()?;
        let position = monitor.position();
        Some(match monitor.name() {
            Some(name) => format!("{}@{},{}", name, position.x, position.y),
            None => format!("{},{}", position.x, position.y),
        })
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn apply_appearance(&self, appearance: Appearance) {
        debug!("Window appearance: {:?}", appearance);
        self.window
            .set_background_color(Some(appearance.background()));

        #[cfg(target_os = "macos")]
        {
            use tao::platform::macos::WindowExtMacOS;
            self.window.set_has_shadow(appearance.has_shadow());
        }
    }

    fn start_drag(&self) {
        if let Err(e) = self.window.drag_window() {
            warn!("Window drag failed: {}", e);
        }
    }

    fn set_visible(&self, visible: bool) {
        self.window.set_visible(visible);
        if visible {
            self.window.set_focus();
        }
    }
}
