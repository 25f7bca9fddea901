//! Uhr content host
//!
//! Locates the bundled clock document and script, inlines the script into
//! the document and loads the result into a web rendering surface.

pub mod assets;
pub mod document;
pub mod host;
pub mod protocol;

pub use assets::ResourceDir;
pub use document::{inline_script, DocumentSpec, InlinedDocument};
pub use host::{ContentHost, ContentSurface, LoadOutcome, LoadStatus};
pub use protocol::{document_url, DocumentSlot, ProtocolResponse, SCHEME};
