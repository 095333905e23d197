//! Local filesystem adapter using std::fs.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use cvgen_core::{
    application::{ApplicationError, ports::FileStore},
    error::CvgenResult,
};

use crate::paths::resolve_within;

/// Production filesystem implementation using `std::fs`.
///
/// Writes go wherever the output directory points; reads are confined to
/// the project root.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Create a new local file store with the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for LocalFileStore {
    fn ensure_directory(&self, path: &Path) -> CvgenResult<PathBuf> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))?;
        Ok(path.to_path_buf())
    }

    fn copy_stylesheet(
        &self,
        source: &Path,
        dest_dir: &Path,
        enabled: bool,
    ) -> CvgenResult<Option<PathBuf>> {
        if !enabled {
            return Ok(None);
        }
        let file_name = source.file_name().unwrap_or(OsStr::new("style.css"));
        let dest = dest_dir.join(file_name);
        std::fs::copy(source, &dest).map_err(|e| map_io_error(source, e, "copy stylesheet"))?;
        Ok(Some(dest))
    }

    fn write_html(&self, html: &str, path: &Path) -> CvgenResult<()> {
        std::fs::write(path, html).map_err(|e| map_io_error(path, e, "write HTML file"))
    }

    fn read_text(&self, path: &Path) -> CvgenResult<String> {
        let resolved = resolve_within(&self.root, path)?;
        std::fs::read_to_string(&resolved).map_err(|e| map_io_error(&resolved, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> cvgen_core::error::CvgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvgen_core::error::CvgenError;
    use std::fs;

    #[test]
    fn ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        let target = dir.path().join("output");

        let first = store.ensure_directory(&target).unwrap();
        let second = store.ensure_directory(&target).unwrap();
        assert_eq!(first, second);
        assert!(target.is_dir());
    }

    #[test]
    fn stylesheet_copy_only_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        let css = dir.path().join("style.css");
        fs::write(&css, "body {}").unwrap();

        assert_eq!(store.copy_stylesheet(&css, dir.path(), false).unwrap(), None);

        let out = dir.path().join("output");
        fs::create_dir(&out).unwrap();
        let copied = store.copy_stylesheet(&css, &out, true).unwrap().unwrap();
        assert_eq!(copied, out.join("style.css"));
        assert_eq!(fs::read_to_string(copied).unwrap(), "body {}");
    }

    #[test]
    fn write_html_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path());
        let path = dir.path().join("page.html");

        store.write_html("<html></html>", &path).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn read_text_refuses_paths_outside_root() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("project");
        fs::create_dir(&root).unwrap();
        let outside = outer.path().join("job.txt");
        fs::write(&outside, "job text").unwrap();

        let store = LocalFileStore::new(&root);
        let err = store.read_text(&outside).unwrap_err();
        assert!(matches!(
            err,
            CvgenError::Application(ApplicationError::PathOutsideRoot { .. })
        ));
    }

    #[test]
    fn read_text_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("job.txt"), "job text").unwrap();

        let store = LocalFileStore::new(dir.path());
        assert_eq!(store.read_text(Path::new("job.txt")).unwrap(), "job text");
    }
}
