//! Shell configuration

use crate::error::{UhrError, UhrResult};
use crate::geometry::DominantAxis;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable selecting a configuration preset.
pub const ENV_VARIANT: &str = "UHR_VARIANT";
/// Environment variable overriding the resource directory.
pub const ENV_RESOURCE_DIR: &str = "UHR_RESOURCE_DIR";

/// Name of the bundled clock document.
pub const DEFAULT_DOCUMENT: &str = "index.html";
/// Name of the bundled clock script.
pub const DEFAULT_SCRIPT: &str = "sbbUhr-1.3.js";

/// Window shell and content host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// How the resize clamp picks the square side
    pub dominant_axis: DominantAxis,

    /// Reload the document when the view size changes
    pub reload_on_resize: bool,

    /// Cover the page with a transparent overlay that drags the window
    pub drag_overlay: bool,

    /// Quit when the window is closed, otherwise just hide it
    pub close_terminates: bool,

    /// Delay before the post-fullscreen redraw nudge
    pub redraw_nudge_delay_ms: u64,

    /// Side length of the window at launch
    pub initial_side: f64,

    /// Explicit resource directory, resolved next to the executable when unset
    pub resource_dir: Option<PathBuf>,

    /// File name of the HTML document inside the resource directory
    pub document_name: String,

    /// File name of the clock script inside the resource directory
    pub script_name: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dominant_axis: DominantAxis::LargestDelta,
            reload_on_resize: true,
            drag_overlay: true,
            close_terminates: true,
            redraw_nudge_delay_ms: 500,
            initial_side: 600.0,
            resource_dir: None,
            document_name: DEFAULT_DOCUMENT.to_string(),
            script_name: DEFAULT_SCRIPT.to_string(),
        }
    }
}

impl ShellConfig {
    /// Plain shell: larger-side clamp, no reloads, no overlay, close hides.
    pub fn minimal() -> Self {
        Self {
            dominant_axis: DominantAxis::LargestSide,
            reload_on_resize: false,
            drag_overlay: false,
            close_terminates: false,
            ..Default::default()
        }
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> UhrResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> UhrResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_VARIANT).as_deref().map(str::trim) {
            None | Some("") | Some("default") => Self::default(),
            Some("minimal") => Self::minimal(),
            Some(other) => {
                return Err(UhrError::config(format!(
                    "unknown {} value '{}', expected 'default' or 'minimal'",
                    ENV_VARIANT, other
                )))
            }
        };

        if let Some(dir) = lookup(ENV_RESOURCE_DIR).filter(|d| !d.trim().is_empty()) {
            config.resource_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Script tag in the bundled document that gets replaced by the inline script.
    pub fn script_tag(&self) -> String {
        format!("<script src=\"{}\"></script>", self.script_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_default() {
        let config = ShellConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_minimal_variant() {
        let config = ShellConfig::from_lookup(lookup_from(&[(ENV_VARIANT, "minimal")])).unwrap();
        assert_eq!(config.dominant_axis, DominantAxis::LargestSide);
        assert!(!config.reload_on_resize);
        assert!(!config.close_terminates);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = ShellConfig::from_lookup(lookup_from(&[(ENV_VARIANT, "fancy")])).unwrap_err();
        assert!(matches!(err, UhrError::Config(_)));
    }

    #[test]
    fn test_resource_dir_override() {
        let config =
            ShellConfig::from_lookup(lookup_from(&[(ENV_RESOURCE_DIR, "/opt/uhr/res")])).unwrap();
        assert_eq!(config.resource_dir, Some(PathBuf::from("/opt/uhr/res")));
    }

    #[test]
    fn test_script_tag() {
        assert_eq!(
            ShellConfig::default().script_tag(),
            "<script src=\"sbbUhr-1.3.js\"></script>"
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ShellConfig = serde_json::from_str(r#"{"drag_overlay": false}"#).unwrap();
        assert!(!config.drag_overlay);
        assert_eq!(config.document_name, DEFAULT_DOCUMENT);
    }
}
