//! Bundled resource lookup
//!
//! The clock document and script ship next to the binary. Inside a macOS
//! bundle that is `Contents/Resources`, one directory up from the executable.
//! Everywhere else a `resources/` directory beside the executable is used,
//! falling back to `./resources` for `cargo run` style launches.

use std::fs;
use std::path::{Path, PathBuf};
use uhr_core::{UhrError, UhrResult};
use url::Url;

/// Directory holding the bundled clock assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDir {
    root: PathBuf,
}

impl ResourceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the resource directory for this process.
    ///
    /// An explicit directory always wins. Otherwise the first existing
    /// candidate derived from the executable location is used.
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }

        let exe = std::env::current_exe().ok();
        let candidates = candidate_dirs(exe.as_deref());
        let root = candidates
            .iter()
            .find(|dir| dir.is_dir())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("resources"));

        log::debug!("Resource directory resolved to {}", root.display());
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a named asset.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read a named asset as UTF-8 text.
    pub fn read_text(&self, name: &str) -> UhrResult<String> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Err(UhrError::AssetMissing(path));
        }
        fs::read_to_string(&path).map_err(|source| UhrError::AssetUnreadable { path, source })
    }

    /// `file://` URL of the directory, with a trailing slash so relative
    /// references resolve inside it.
    pub fn base_url(&self) -> UhrResult<Url> {
        let absolute = if self.root.is_absolute() {
            self.root.clone()
        } else {
            std::env::current_dir()?.join(&self.root)
        };
        Url::from_directory_path(&absolute)
            .map_err(|_| UhrError::config(format!("not a usable base directory: {}", absolute.display())))
    }
}

/// Candidate resource directories for an executable path, most specific first.
pub fn candidate_dirs(exe: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = exe.and_then(Path::parent) {
        if exe_dir.file_name().map_or(false, |n| n == "MacOS") {
            if let Some(contents) = exe_dir.parent() {
                dirs.push(contents.join("Resources"));
            }
        }
        dirs.push(exe_dir.join("resources"));
    }
    dirs.push(PathBuf::from("resources"));
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_candidates() {
        let exe = Path::new("/Applications/Uhr.app/Contents/MacOS/uhr");
        let dirs = candidate_dirs(Some(exe));
        assert_eq!(dirs[0], PathBuf::from("/Applications/Uhr.app/Contents/Resources"));
        assert_eq!(dirs[1], PathBuf::from("/Applications/Uhr.app/Contents/MacOS/resources"));
        assert_eq!(dirs[2], PathBuf::from("resources"));
    }

    #[test]
    fn test_plain_binary_candidates() {
        let dirs = candidate_dirs(Some(Path::new("/usr/local/bin/uhr")));
        assert_eq!(
            dirs,
            vec![PathBuf::from("/usr/local/bin/resources"), PathBuf::from("resources")]
        );
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = ResourceDir::locate(Some(Path::new("/nowhere/res")));
        assert_eq!(dir.root(), Path::new("/nowhere/res"));
    }

    #[test]
    fn test_missing_asset() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ResourceDir::new(tmp.path());
        let err = dir.read_text("index.html").unwrap_err();
        assert!(matches!(err, UhrError::AssetMissing(_)));
    }

    #[test]
    fn test_base_url_has_trailing_slash() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ResourceDir::new(tmp.path());
        let url = dir.base_url().unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.as_str().ends_with('/'));
        assert_eq!(url.join("face.css").unwrap().to_file_path().unwrap(), tmp.path().join("face.css"));
    }
}
