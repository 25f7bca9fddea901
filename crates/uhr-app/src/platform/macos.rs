//! macOS platform implementation
//!
//! The clock window is borderless, so the app menu is the only way to quit,
//! hide or enter fullscreen from the keyboard. WebKit on macOS also fails to
//! repaint after leaving fullscreen until the window size changes.

use super::{menu_ids, PlatformCapabilities, PlatformError, PlatformManager, PlatformResult, WebViewEngine};
use muda::{
    accelerator::{Accelerator, Code, Modifiers},
    Menu, MenuItem, PredefinedMenuItem, Submenu,
};
use tao::window::Window;
use tracing::debug;

/// macOS platform manager
pub struct MacOSPlatform {
    capabilities: PlatformCapabilities,
}

impl MacOSPlatform {
    pub fn new() -> Self {
        Self {
            capabilities: PlatformCapabilities {
                needs_redraw_nudge: true,
                supports_reopen: true,
                webview_engine: WebViewEngine::WebKit,
                platform_name: "macOS",
            },
        }
    }

    /// Create the standard macOS application menu
    fn create_app_menu(&self, menu: &Menu) -> PlatformResult<()> {
        let app_menu = Submenu::new("Uhr", true);

        app_menu
            .append(&PredefinedMenuItem::about(Some("About Uhr"), None))
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add About: {}", e)))?;

        app_menu
            .append(&PredefinedMenuItem::separator())
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add separator: {}", e)))?;

        app_menu
            .append(&PredefinedMenuItem::hide(None))
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add Hide: {}", e)))?;

        app_menu
            .append(&PredefinedMenuItem::hide_others(None))
            .map_err(|e| {
                PlatformError::MenuInitFailed(format!("Failed to add Hide Others: {}", e))
            })?;

        app_menu
            .append(&PredefinedMenuItem::show_all(None))
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add Show All: {}", e)))?;

        app_menu
            .append(&PredefinedMenuItem::separator())
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add separator: {}", e)))?;

        app_menu
            .append(&PredefinedMenuItem::quit(None))
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add Quit: {}", e)))?;

        menu.append(&app_menu)
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to append app menu: {}", e)))?;

        Ok(())
    }

    /// Create the Window menu with fullscreen and minimize
    fn create_window_menu(&self, menu: &Menu) -> PlatformResult<()> {
        let window_menu = Submenu::new("Window", true);

        // Toggle Full Screen (Ctrl+Cmd+F)
        let fullscreen_item = MenuItem::with_id(
            menu_ids::TOGGLE_FULLSCREEN,
            "Toggle Full Screen",
            true,
            Some(Accelerator::new(
                Some(Modifiers::META | Modifiers::CONTROL),
                Code::KeyF,
            )),
        );
        window_menu
            .append(&fullscreen_item)
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add Full Screen: {}", e)))?;

        window_menu
            .append(&PredefinedMenuItem::minimize(None))
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add Minimize: {}", e)))?;

        window_menu
            .append(&PredefinedMenuItem::close_window(None))
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to add Close Window: {}", e)))?;

        menu.append(&window_menu)
            .map_err(|e| PlatformError::MenuInitFailed(format!("Failed to append window menu: {}", e)))?;

        Ok(())
    }
}

impl Default for MacOSPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformManager for MacOSPlatform {
    fn initialize_menu(&self, _window: &Window, menu: &Menu) -> PlatformResult<()> {
        self.create_app_menu(menu)?;
        self.create_window_menu(menu)?;

        menu.init_for_nsapp();

        debug!("macOS menu initialized");
        Ok(())
    }

    fn capabilities(&self) -> &PlatformCapabilities {
        &self.capabilities
    }
}
