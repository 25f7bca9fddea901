//! Error types for Uhr

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Uhr operations
pub type UhrResult<T> = Result<T, UhrError>;

/// Main error type for Uhr
#[derive(Error, Debug)]
pub enum UhrError {
    #[error("Bundled asset not found: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("Bundled asset unreadable: {}: {source}", path.display())]
    AssetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WebView error: {0}")]
    WebView(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UhrError {
    /// Create a new WebView error
    pub fn webview(msg: impl Into<String>) -> Self {
        Self::WebView(msg.into())
    }

    /// Create a new window error
    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures caused by the bundled resources rather than the platform
    pub fn is_asset_error(&self) -> bool {
        matches!(self, Self::AssetMissing(_) | Self::AssetUnreadable { .. })
    }
}
