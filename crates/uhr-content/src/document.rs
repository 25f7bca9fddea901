//! Composition of the clock document.
//!
//! The page references its script through a relative `<script src>` tag,
//! which does not load reliably from an in-memory document. The tag is
//! replaced by an inline block carrying the script source.

use crate::assets::ResourceDir;
use uhr_core::UhrResult;

/// Result of inlining a script into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinedDocument {
    pub html: String,
    /// False when the tag was not present and the document is unchanged.
    pub replaced: bool,
}

/// Replace the first occurrence of `tag` in `html` with `<script>{js}</script>`.
pub fn inline_script(html: &str, tag: &str, js: &str) -> InlinedDocument {
    match html.find(tag) {
        Some(start) => {
            let mut out = String::with_capacity(html.len() - tag.len() + js.len() + 17);
            out.push_str(&html[..start]);
            out.push_str("<script>");
            out.push_str(js);
            out.push_str("</script>");
            out.push_str(&html[start + tag.len()..]);
            InlinedDocument {
                html: out,
                replaced: true,
            }
        }
        None => InlinedDocument {
            html: html.to_string(),
            replaced: false,
        },
    }
}

/// Names of the bundled files making up the clock page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub document_name: String,
    pub script_name: String,
    pub script_tag: String,
}

impl DocumentSpec {
    pub fn from_config(config: &uhr_core::ShellConfig) -> Self {
        Self {
            document_name: config.document_name.clone(),
            script_name: config.script_name.clone(),
            script_tag: config.script_tag(),
        }
    }

    /// Read both assets and produce the self-contained document.
    pub fn compose(&self, resources: &ResourceDir) -> UhrResult<String> {
        let html = resources.read_text(&self.document_name)?;
        let js = resources.read_text(&self.script_name)?;

        let doc = inline_script(&html, &self.script_tag, &js);
        if !doc.replaced {
            log::warn!(
                "{} has no '{}' tag, loading it unchanged",
                self.document_name,
                self.script_tag
            );
        }
        Ok(doc.html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: &str = r#"<script src="sbbUhr-1.3.js"></script>"#;

    #[test]
    fn test_inline_replaces_tag_in_place() {
        let html = format!("<head>{}</head><body><div id=\"clock\"></div></body>", TAG);
        let doc = inline_script(&html, TAG, "var S = 1;");
        assert!(doc.replaced);
        assert_eq!(
            doc.html,
            "<head><script>var S = 1;</script></head><body><div id=\"clock\"></div></body>"
        );
        assert!(!doc.html.contains("sbbUhr-1.3.js"));
    }

    #[test]
    fn test_inline_only_first_occurrence() {
        let html = format!("{}{}", TAG, TAG);
        let doc = inline_script(&html, TAG, "x()");
        assert_eq!(doc.html, format!("<script>x()</script>{}", TAG));
    }

    #[test]
    fn test_missing_tag_leaves_document() {
        let doc = inline_script("<p>no script</p>", TAG, "x()");
        assert!(!doc.replaced);
        assert_eq!(doc.html, "<p>no script</p>");
    }

    #[test]
    fn test_script_source_is_verbatim() {
        let js = "if (a < b && c > d) { $& $1 }";
        let doc = inline_script(TAG, TAG, js);
        assert_eq!(doc.html, format!("<script>{}</script>", js));
    }
}
