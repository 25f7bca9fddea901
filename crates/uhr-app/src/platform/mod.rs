//! Platform abstraction layer
//!
//! Menu setup and the platform quirks the window shell has to know about
//! differ between macOS, Windows and Linux. Everything else is shared.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use muda::Menu;
use std::time::Duration;
use tao::window::Window;
use uhr_shell::ShellCapabilities;

/// Menu item IDs handled by the event loop
pub mod menu_ids {
    pub const TOGGLE_FULLSCREEN: &str = "toggle_fullscreen";
}

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Platform-specific error types
#[derive(Debug, Clone)]
pub enum PlatformError {
    /// Menu initialization failed
    MenuInitFailed(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::MenuInitFailed(msg) => write!(f, "Menu initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

/// WebView engine type for the current platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebViewEngine {
    /// WebKit (macOS native, Linux GTK)
    WebKit,
    /// WebView2 (Windows, Chromium-based)
    WebView2,
}

impl WebViewEngine {
    pub fn name(&self) -> &'static str {
        match self {
            WebViewEngine::WebKit => "WebKit",
            WebViewEngine::WebView2 => "WebView2",
        }
    }
}

/// Platform-specific capabilities
#[derive(Debug, Clone)]
pub struct PlatformCapabilities {
    /// The web view stops repainting after leaving fullscreen until the
    /// window is resized (macOS WebKit)
    pub needs_redraw_nudge: bool,
    /// A hidden window comes back through the dock or the app menu (macOS)
    pub supports_reopen: bool,
    /// The WebView engine used on this platform
    pub webview_engine: WebViewEngine,
    /// Platform name for logging/debugging
    pub platform_name: &'static str,
}

/// Trait for platform-specific operations
pub trait PlatformManager {
    /// Install the application menu.
    ///
    /// On macOS this provides Quit, Hide and the fullscreen shortcut. The
    /// clock window is borderless, so other platforms get no menu bar.
    fn initialize_menu(&self, window: &Window, menu: &Menu) -> PlatformResult<()>;

    /// Get the platform's capabilities
    fn capabilities(&self) -> &PlatformCapabilities;

    /// Get the platform name for logging
    fn platform_name(&self) -> &'static str {
        self.capabilities().platform_name
    }

    /// Capabilities in the form the window shell consumes
    fn shell_capabilities(&self, nudge_delay: Duration) -> ShellCapabilities {
        ShellCapabilities {
            needs_redraw_nudge: self.capabilities().needs_redraw_nudge,
            redraw_nudge_delay: nudge_delay,
            supports_reopen: self.capabilities().supports_reopen,
        }
    }
}

/// Get the platform manager for the current operating system
pub fn get_platform_manager() -> Box<dyn PlatformManager> {
    #[cfg(target_os = "macos")]
    {
        Box::new(macos::MacOSPlatform::new())
    }

    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsPlatform::new())
    }

    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxPlatform::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_nudge_only_on_macos() {
        let platform = get_platform_manager();
        assert_eq!(
            platform.capabilities().needs_redraw_nudge,
            cfg!(target_os = "macos")
        );
    }

    #[test]
    fn test_shell_capabilities_carry_delay() {
        let platform = get_platform_manager();
        let caps = platform.shell_capabilities(Duration::from_millis(250));
        assert_eq!(caps.redraw_nudge_delay, Duration::from_millis(250));
        assert_eq!(caps.needs_redraw_nudge, platform.capabilities().needs_redraw_nudge);
    }

    #[test]
    fn test_reopen_only_on_macos() {
        let caps = get_platform_manager().shell_capabilities(Duration::from_millis(500));
        assert_eq!(caps.supports_reopen, cfg!(target_os = "macos"));
    }

    #[test]
    fn test_engine_names() {
        assert_eq!(WebViewEngine::WebKit.name(), "WebKit");
        assert_eq!(WebViewEngine::WebView2.name(), "WebView2");
    }
}
