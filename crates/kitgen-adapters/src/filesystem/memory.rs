//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use kitgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep one handle while the
/// service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories).
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let mut inner = self.write_lock();
        if let Some(parent) = path.parent() {
            inner.add_dir(parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_lock().files.get(path.as_ref()).cloned()
    }

    /// All files under `root`, as paths relative to it.
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.read_lock()
            .files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_lock();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read_lock().directories.contains(path)
    }

    fn create_dir(&self, path: &Path) -> KitResult<()> {
        let mut inner = self.write_lock();
        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::DestinationExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        inner.add_dir(path);
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> KitResult<usize> {
        let mut inner = self.write_lock();
        if !inner.directories.contains(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "Source directory does not exist".into(),
            }
            .into());
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        for dir in dirs {
            inner.add_dir(&dir);
        }
        let copied = files.len();
        inner.files.extend(files);
        Ok(copied)
    }

    fn read_to_string(&self, path: &Path) -> KitResult<Option<String>> {
        Ok(self.read_lock().files.get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> KitResult<()> {
        let mut inner = self.write_lock();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
