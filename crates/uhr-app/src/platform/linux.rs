//! Linux platform implementation
//!
//! GTK WebKit repaints correctly after fullscreen changes. A menu bar would
//! show inside the borderless clock window, so none is installed.

use super::{PlatformCapabilities, PlatformManager, PlatformResult, WebViewEngine};
use muda::Menu;
use tao::window::Window;
use tracing::debug;

/// Linux platform manager
pub struct LinuxPlatform {
    capabilities: PlatformCapabilities,
}

impl LinuxPlatform {
    pub fn new() -> Self {
        Self {
            capabilities: PlatformCapabilities {
                needs_redraw_nudge: false,
                supports_reopen: false,
                webview_engine: WebViewEngine::WebKit,
                platform_name: "Linux",
            },
        }
    }
}

impl Default for LinuxPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformManager for LinuxPlatform {
    fn initialize_menu(&self, _window: &Window, _menu: &Menu) -> PlatformResult<()> {
        debug!("Skipping menu bar for borderless window");
        Ok(())
    }

    fn capabilities(&self) -> &PlatformCapabilities {
        &self.capabilities
    }
}
