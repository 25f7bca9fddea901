//! Loads the real bundled clock assets through the protocol slot.

use std::path::PathBuf;
use uhr_content::{ContentHost, ContentSurface, DocumentSlot, DocumentSpec, LoadStatus, ResourceDir};
use uhr_core::{FrameSize, ShellConfig, UhrResult};
use url::Url;

struct SlotSurface(DocumentSlot);

impl ContentSurface for SlotSurface {
    fn load_document(&self, html: &str, base_url: &Url) -> UhrResult<()> {
        self.0.publish(html, base_url);
        Ok(())
    }
}

fn bundled_resources() -> ResourceDir {
    ResourceDir::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources"))
}

#[test]
fn bundled_document_is_self_contained() {
    let config = ShellConfig::default();
    let html = DocumentSpec::from_config(&config)
        .compose(&bundled_resources())
        .expect("bundled assets present");

    assert!(!html.contains(&config.script_tag()));
    assert!(!html.contains("src=\"sbbUhr-1.3.js\""));
    assert!(html.contains("<script>"));
}

#[test]
fn protocol_serves_loaded_document_and_siblings() {
    let slot = DocumentSlot::new();
    let mut host = ContentHost::new(
        SlotSurface(slot.clone()),
        bundled_resources(),
        DocumentSpec::from_config(&ShellConfig::default()),
        true,
    );

    assert_eq!(host.attach(FrameSize::square(600.0)), LoadStatus::Loaded);
    assert!(slot.is_published());

    let root = slot.resolve("/");
    assert!(root.is_success());
    assert!(String::from_utf8_lossy(&root.body).contains("<script>"));

    let css = slot.resolve("/uhr.css");
    assert!(css.is_success());
    assert!(css.mime.starts_with("text/css"));
}

#[test]
fn resize_reloads_once_per_distinct_size() {
    let slot = DocumentSlot::new();
    let mut host = ContentHost::new(
        SlotSurface(slot),
        bundled_resources(),
        DocumentSpec::from_config(&ShellConfig::default()),
        true,
    );

    host.attach(FrameSize::square(600.0));
    let statuses: Vec<LoadStatus> = [700.0, 700.0, 700.0, 650.0]
        .into_iter()
        .map(|side| host.on_size_changed(FrameSize::square(side)))
        .collect();

    assert_eq!(
        statuses,
        vec![
            LoadStatus::Loaded,
            LoadStatus::Skipped,
            LoadStatus::Skipped,
            LoadStatus::Loaded
        ]
    );
}
