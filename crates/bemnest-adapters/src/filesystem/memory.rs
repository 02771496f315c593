//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use bemnest_core::{
    application::{ApplicationError, ports::Filesystem},
    error::NestResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    /// Number of mutating calls (create, write, append).
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file and its parent directories without counting a write.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// How many mutating calls have been made so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn ensure_parent(inner: &MemoryFilesystemInner, path: &Path) -> NestResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
    }
    Ok(())
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> NestResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        insert_ancestors(&mut inner.directories, path);
        inner.writes += 1;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> NestResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> NestResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        ensure_parent(&inner, path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> NestResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        ensure_parent(&inner, path)?;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();

        fs.create_dir_all(Path::new("/site/blocks")).unwrap();
        fs.write_file(Path::new("/site/blocks/a.css"), "x").unwrap();

        assert!(other.exists(Path::new("/site")));
        assert_eq!(other.read_file("/site/blocks/a.css").as_deref(), Some("x"));
        assert_eq!(other.write_count(), 2);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nowhere/a.css"), "x").is_err());
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn seeded_files_are_not_counted() {
        let fs = MemoryFilesystem::new().with_file("/site/index.html", "<p></p>");
        assert!(fs.exists(Path::new("/site")));
        assert_eq!(fs.write_count(), 0);
        assert_eq!(
            fs.read_to_string(Path::new("/site/index.html")).unwrap(),
            "<p></p>"
        );
    }
}
