//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use kitgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{KitError, KitResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    fn create_dir_all(&self, path: &Path) -> KitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> KitResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::DestinationExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> KitResult<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(from).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(from).to_path_buf();
                let reason = format!("Failed to walk template: {e}");
                KitError::from(ApplicationError::FilesystemError { path, reason })
            })?;

            let relative = entry.path().strip_prefix(from).map_err(|e| {
                KitError::from(ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                })
            })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                self.create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)
                .map_err(|e| map_io_error(entry.path(), e, "copy file"))?;
            trace!(file = %relative.display(), "Copied");
            copied += 1;
        }

        Ok(copied)
    }

    fn read_to_string(&self, path: &Path) -> KitResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> KitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn template() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::create_dir_all(dir.path().join("public/empty")).unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("src/app/page.tsx"), "export {}").unwrap();
        fs::write(dir.path().join("public/logo.png"), [0x89, b'P', b'N', b'G', 0, 0xff]).unwrap();
        dir
    }

    #[test]
    fn copy_tree_preserves_relative_paths_and_bytes() {
        let src = template();
        let dst = TempDir::new().unwrap();
        let fs_adapter = LocalFilesystem::new();

        let copied = fs_adapter.copy_tree(src.path(), dst.path()).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(
            fs::read(dst.path().join("public/logo.png")).unwrap(),
            [0x89, b'P', b'N', b'G', 0, 0xff]
        );
        assert_eq!(
            fs::read_to_string(dst.path().join("src/app/page.tsx")).unwrap(),
            "export {}"
        );
        assert!(dst.path().join("public/empty").is_dir());
    }

    #[test]
    fn read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = LocalFilesystem::new()
            .read_to_string(&dir.path().join("README.md"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        let fs_adapter = LocalFilesystem::new();

        fs_adapter.write_file(&path, "# hello\n").unwrap();
        assert_eq!(fs_adapter.read_to_string(&path).unwrap().as_deref(), Some("# hello\n"));
    }

    #[test]
    fn exists_and_is_dir_distinguish_files() {
        let src = template();
        let fs_adapter = LocalFilesystem::new();

        assert!(fs_adapter.exists(&src.path().join("package.json")));
        assert!(!fs_adapter.is_dir(&src.path().join("package.json")));
        assert!(fs_adapter.is_dir(&src.path().join("src")));
        assert!(!fs_adapter.exists(&src.path().join("nope")));
    }

    #[test]
    fn create_dir_refuses_existing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("work/app");
        let fs_adapter = LocalFilesystem::new();

        fs_adapter.create_dir(&path).unwrap();
        assert!(path.is_dir());
        assert!(matches!(
            fs_adapter.create_dir(&path),
            Err(KitError::Application(ApplicationError::DestinationExists { .. }))
        ));
    }

    #[test]
    fn non_utf8_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, b"# \xff\xfe\n").unwrap();

        assert!(matches!(
            LocalFilesystem::new().read_to_string(&path),
            Err(KitError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }

    #[test]
    fn copy_from_missing_source_fails() {
        let dst = TempDir::new().unwrap();
        let result = LocalFilesystem::new().copy_tree(&dst.path().join("missing"), dst.path());
        assert!(matches!(
            result,
            Err(KitError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }
}
