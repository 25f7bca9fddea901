//! Content host: loads the clock document into a rendering surface.

use crate::assets::ResourceDir;
use crate::document::DocumentSpec;
use uhr_core::{FrameSize, UhrResult};
use url::Url;

/// A web rendering surface the clock document can be loaded into.
///
/// Implementations live on the UI thread; nothing here is `Send`.
pub trait ContentSurface {
    /// Replace the current page with `html`, resolving relative references
    /// against `base_url`.
    fn load_document(&self, html: &str, base_url: &Url) -> UhrResult<()>;
}

impl<T: ContentSurface + ?Sized> ContentSurface for std::rc::Rc<T> {
    fn load_document(&self, html: &str, base_url: &Url) -> UhrResult<()> {
        (**self).load_document(html, base_url)
    }
}

/// Navigation outcome reported back by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Finished,
    Failed(String),
    ProvisionalFailed(String),
}

/// What a load request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The document was handed to the surface.
    Loaded,
    /// The size matched the last load, nothing was done.
    Skipped,
    /// Assets or the surface failed; the surface stays as it was.
    Failed,
}

/// Owns the rendering surface state: the size the document was last loaded
/// at and whether the last navigation finished.
pub struct ContentHost<S: ContentSurface> {
    surface: S,
    resources: ResourceDir,
    spec: DocumentSpec,
    reload_on_resize: bool,
    loaded_size: Option<FrameSize>,
    document_loaded: bool,
}

impl<S: ContentSurface> ContentHost<S> {
    pub fn new(
        surface: S,
        resources: ResourceDir,
        spec: DocumentSpec,
        reload_on_resize: bool,
    ) -> Self {
        Self {
            surface,
            resources,
            spec,
            reload_on_resize,
            loaded_size: None,
            document_loaded: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// True once the surface reported a finished navigation.
    pub fn is_document_loaded(&self) -> bool {
        self.document_loaded
    }

    /// Initial load when the view is created.
    pub fn attach(&mut self, size: FrameSize) -> LoadStatus {
        self.load_at(size)
    }

    /// Size change reported by the view.
    ///
    /// Reloads only when reloading is enabled and the size differs from the
    /// one the document was last loaded at.
    pub fn on_size_changed(&mut self, size: FrameSize) -> LoadStatus {
        if !self.reload_on_resize || self.loaded_size == Some(size) {
            return LoadStatus::Skipped;
        }
        self.load_at(size)
    }

    /// Record a navigation outcome from the surface.
    pub fn on_outcome(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Finished => {
                log::info!("Clock document finished loading");
                self.document_loaded = true;
            }
            LoadOutcome::Failed(reason) => {
                log::error!("Clock document failed to load: {}", reason);
                self.document_loaded = false;
            }
            LoadOutcome::ProvisionalFailed(reason) => {
                log::error!("Clock document failed provisional navigation: {}", reason);
                self.document_loaded = false;
            }
        }
    }

    fn load_at(&mut self, size: FrameSize) -> LoadStatus {
        // Recorded before loading so a failing size is not retried until it changes.
        self.loaded_size = Some(size);
        self.document_loaded = false;

        match self.try_load() {
            Ok(()) => {
                log::debug!("Loaded clock document at {}x{}", size.width, size.height);
                LoadStatus::Loaded
            }
            Err(e) if e.is_asset_error() => {
                log::error!("Bundled clock assets unusable, surface left blank: {}", e);
                LoadStatus::Failed
            }
            Err(e) => {
                log::error!("Clock surface rejected the document: {}", e);
                LoadStatus::Failed
            }
        }
    }

    fn try_load(&self) -> UhrResult<()> {
        let html = self.spec.compose(&self.resources)?;
        let base_url = self.resources.base_url()?;
        self.surface.load_document(&html, &base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use uhr_core::{ShellConfig, UhrError};

    #[derive(Default)]
    struct RecordingSurface {
        loads: RefCell<Vec<(String, Url)>>,
        fail: bool,
    }

    impl ContentSurface for RecordingSurface {
        fn load_document(&self, html: &str, base_url: &Url) -> UhrResult<()> {
            if self.fail {
                return Err(UhrError::webview("surface gone"));
            }
            self.loads
                .borrow_mut()
                .push((html.to_string(), base_url.clone()));
            Ok(())
        }
    }

    fn bundle() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("index.html"),
            r#"<html><script src="sbbUhr-1.3.js"></script></html>"#,
        )
        .unwrap();
        fs::write(tmp.path().join("sbbUhr-1.3.js"), "tick();").unwrap();
        tmp
    }

    fn host(dir: &tempfile::TempDir, reload: bool) -> ContentHost<RecordingSurface> {
        ContentHost::new(
            RecordingSurface::default(),
            ResourceDir::new(dir.path()),
            DocumentSpec::from_config(&ShellConfig::default()),
            reload,
        )
    }

    #[test]
    fn test_attach_loads_inlined_document() {
        let dir = bundle();
        let mut host = host(&dir, true);
        assert_eq!(host.attach(FrameSize::square(600.0)), LoadStatus::Loaded);

        let loads = host.surface().loads.borrow();
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].0, "<html><script>tick();</script></html>");
        assert_eq!(loads[0].1.to_file_path().unwrap(), dir.path());
    }

    #[test]
    fn test_identical_size_is_debounced() {
        let dir = bundle();
        let mut host = host(&dir, true);
        host.attach(FrameSize::square(600.0));
        assert_eq!(host.on_size_changed(FrameSize::square(600.0)), LoadStatus::Skipped);
        assert_eq!(host.on_size_changed(FrameSize::square(640.0)), LoadStatus::Loaded);
        assert_eq!(host.on_size_changed(FrameSize::square(640.0)), LoadStatus::Skipped);
        assert_eq!(host.surface().loads.borrow().len(), 2);
    }

    #[test]
    fn test_reload_disabled() {
        let dir = bundle();
        let mut host = host(&dir, false);
        host.attach(FrameSize::square(600.0));
        assert_eq!(host.on_size_changed(FrameSize::square(700.0)), LoadStatus::Skipped);
        assert_eq!(host.surface().loads.borrow().len(), 1);
    }

    #[test]
    fn test_missing_script_leaves_surface_blank() {
        let dir = bundle();
        fs::remove_file(dir.path().join("sbbUhr-1.3.js")).unwrap();
        let mut host = host(&dir, true);
        assert_eq!(host.attach(FrameSize::square(600.0)), LoadStatus::Failed);
        assert!(host.surface().loads.borrow().is_empty());
        // Same size is not retried
        assert_eq!(host.on_size_changed(FrameSize::square(600.0)), LoadStatus::Skipped);
    }

    #[test]
    fn test_surface_failure_reported() {
        let dir = bundle();
        let mut host = ContentHost::new(
            RecordingSurface {
                fail: true,
                ..Default::default()
            },
            ResourceDir::new(dir.path()),
            DocumentSpec::from_config(&ShellConfig::default()),
            true,
        );
        assert_eq!(host.attach(FrameSize::square(600.0)), LoadStatus::Failed);
    }

    #[test]
    fn test_outcomes_track_loaded_flag() {
        let dir = bundle();
        let mut host = host(&dir, true);
        host.attach(FrameSize::square(600.0));
        assert!(!host.is_document_loaded());
        host.on_outcome(LoadOutcome::Finished);
        assert!(host.is_document_loaded());
        host.on_outcome(LoadOutcome::Failed("404".into()));
        assert!(!host.is_document_loaded());
    }
}
