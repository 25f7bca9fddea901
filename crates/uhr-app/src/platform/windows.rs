//! Windows platform implementation
//!
//! WebView2 repaints correctly after fullscreen changes. `init_for_hwnd`
//! would attach a menu bar to the borderless clock window, so none is
//! installed.

use super::{PlatformCapabilities, PlatformManager, PlatformResult, WebViewEngine};
use muda::Menu;
use tao::window::Window;
use tracing::debug;

/// Windows platform manager
pub struct WindowsPlatform {
    capabilities: PlatformCapabilities,
}

impl WindowsPlatform {
    pub fn new() -> Self {
        Self {
            capabilities: PlatformCapabilities {
                needs_redraw_nudge: false,
                supports_reopen: false,
                webview_engine: WebViewEngine::WebView2,
                platform_name: "Windows",
            },
        }
    }
}

impl Default for WindowsPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformManager for WindowsPlatform {
    fn initialize_menu(&self, _window: &Window, _menu: &Menu) -> PlatformResult<()> {
        debug!("Skipping menu bar for borderless window");
        Ok(())
    }

    fn capabilities(&self) -> &PlatformCapabilities {
        &self.capabilities
    }
}
