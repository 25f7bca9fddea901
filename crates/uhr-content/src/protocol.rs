//! `uhr://` custom protocol routing.
//!
//! The composed document is served at the protocol root. Every other path is
//! resolved against the base directory the document was loaded with, which
//! gives the page the same relative-URL behaviour as a document loaded with a
//! base URL.

use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, RwLock};
use url::Url;

/// Scheme name registered with the web view.
pub const SCHEME: &str = "uhr";

/// URL the web view navigates to for the composed document.
pub fn document_url() -> &'static str {
    // WebView2 maps custom schemes onto http://<scheme>.localhost
    if cfg!(target_os = "windows") {
        "http://uhr.localhost/"
    } else {
        "uhr://localhost/"
    }
}

#[derive(Debug, Clone)]
struct Document {
    html: String,
    base_dir: Option<PathBuf>,
}

/// Composed document shared between the content host and the protocol handler.
#[derive(Debug, Clone, Default)]
pub struct DocumentSlot {
    inner: Arc<RwLock<Option<Document>>>,
}

impl DocumentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new document; `base_url` must be a `file://` directory URL.
    pub fn publish(&self, html: &str, base_url: &Url) {
        let base_dir = base_url.to_file_path().ok();
        if base_dir.is_none() {
            log::warn!("Base URL {} is not a local directory", base_url);
        }
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(Document {
                html: html.to_string(),
                base_dir,
            });
        }
    }

    pub fn is_published(&self) -> bool {
        self.inner.read().map(|d| d.is_some()).unwrap_or(false)
    }

    /// Answer a protocol request for `path` (the URL path, still percent-encoded).
    pub fn resolve(&self, path: &str) -> ProtocolResponse {
        let doc = match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        };
        let Some(doc) = doc else {
            return ProtocolResponse::not_found(true);
        };

        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() || trimmed == "index.html" {
            return ProtocolResponse::ok("text/html; charset=utf-8", doc.html.into_bytes());
        }

        let Some(base_dir) = doc.base_dir else {
            return ProtocolResponse::not_found(false);
        };
        let Some(relative) = sanitize(trimmed) else {
            log::warn!("Rejected protocol path {}", path);
            return ProtocolResponse::forbidden();
        };

        let full = base_dir.join(relative);
        match std::fs::read(&full) {
            Ok(body) => ProtocolResponse::ok(mime_for(&full), body),
            Err(e) => {
                log::warn!("Sub-resource {} not served: {}", full.display(), e);
                ProtocolResponse::not_found(false)
            }
        }
    }
}

/// Protocol-level response, converted to an HTTP response by the web view glue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolResponse {
    pub status: u16,
    pub mime: &'static str,
    pub body: Vec<u8>,
    /// Set when the failed request was for the document itself.
    pub document: bool,
}

impl ProtocolResponse {
    fn ok(mime: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            mime,
            body,
            document: false,
        }
    }

    fn not_found(document: bool) -> Self {
        Self {
            status: 404,
            mime: "text/plain",
            body: b"not found".to_vec(),
            document,
        }
    }

    fn forbidden() -> Self {
        Self {
            status: 403,
            mime: "text/plain",
            body: b"forbidden".to_vec(),
            document: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Percent-decode a request path and refuse anything leaving the base dir.
fn sanitize(path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(path).ok()?;
    let mut out = PathBuf::new();
    for component in Path::new(decoded.as_ref()).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("woff2") => "font/woff2",
        Some("woff") => "font/woff",
        Some("ttf") => "font/ttf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn published(dir: &Path) -> DocumentSlot {
        let slot = DocumentSlot::new();
        let base = Url::from_directory_path(dir).unwrap();
        slot.publish("<html>clock</html>", &base);
        slot
    }

    #[test]
    fn test_unpublished_root_is_document_failure() {
        let slot = DocumentSlot::new();
        let resp = slot.resolve("/");
        assert_eq!(resp.status, 404);
        assert!(resp.document);
    }

    #[test]
    fn test_root_serves_document() {
        let tmp = tempfile::tempdir().unwrap();
        let slot = published(tmp.path());
        let resp = slot.resolve("/");
        assert!(resp.is_success());
        assert_eq!(resp.body, b"<html>clock</html>");
        assert!(resp.mime.starts_with("text/html"));
    }

    #[test]
    fn test_relative_asset_served_from_base() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("face plate.css"), "body{}").unwrap();
        let slot = published(tmp.path());
        let resp = slot.resolve("/face%20plate.css");
        assert!(resp.is_success());
        assert_eq!(resp.mime, "text/css; charset=utf-8");
        assert_eq!(resp.body, b"body{}");
    }

    #[test]
    fn test_missing_asset_is_not_document_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let slot = published(tmp.path());
        let resp = slot.resolve("/missing.png");
        assert_eq!(resp.status, 404);
        assert!(!resp.document);
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let slot = published(tmp.path());
        assert_eq!(slot.resolve("/../secret").status, 403);
        assert_eq!(slot.resolve("/a/%2E%2E/%2E%2E/secret").status, 403);
    }
}
