//! IPC between the clock page and the shell.
//!
//! The page never talks to the shell on its own. The only sender is the drag
//! overlay injected at document start.

use serde::Deserialize;

/// IPC message from JavaScript to Rust
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcMessage {
    /// Pointer went down on the drag overlay
    StartDrag,
}

impl IpcMessage {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Full-surface transparent overlay that turns any pointer-down into a
/// window drag. The title bar is gone, so this is the only way to move the
/// window.
pub const DRAG_OVERLAY: &str = r#"
(function () {
  function install() {
    if (document.getElementById("__uhr_drag")) {
      return;
    }
    var overlay = document.createElement("div");
    overlay.id = "__uhr_drag";
    overlay.style.cssText =
      "position:fixed;inset:0;z-index:2147483647;background:transparent;cursor:default;";
    overlay.addEventListener("mousedown", function (e) {
      if (e.button !== 0) {
        return;
      }
      e.preventDefault();
      window.ipc.postMessage(JSON.stringify({ cmd: "start_drag" }));
    });
    document.documentElement.appendChild(overlay);
  }

  if (document.readyState === "loading") {
    document.addEventListener("DOMContentLoaded", install);
  } else {
    install();
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_drag() {
        assert_eq!(
            IpcMessage::parse(r#"{"cmd":"start_drag"}"#).unwrap(),
            IpcMessage::StartDrag
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(IpcMessage::parse(r#"{"cmd":"navigate","url":"x"}"#).is_err());
        assert!(IpcMessage::parse("not json").is_err());
    }

    #[test]
    fn test_overlay_posts_start_drag() {
        assert!(DRAG_OVERLAY.contains(r#"cmd: "start_drag""#));
    }
}
