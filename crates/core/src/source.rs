//! Source provider abstraction.
//!
//! The validator itself never touches the filesystem; a [`SourceProvider`]
//! supplies the program text once, up front.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait SourceProvider {
    /// Read the whole source text for `path`.
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Reads sources with `std::fs`.
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// Serves sources from a path → text map. Used in tests.
#[derive(Default)]
pub struct InMemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl InMemoryProvider {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, src: impl Into<String>) -> Self {
        self.files.insert(path.into(), src.into());
        self
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_read_existing() {
        let provider = InMemoryProvider::default().with_file("main.robot", "[ nop ]");
        let src = provider.read_source(Path::new("main.robot")).unwrap();
        assert_eq!(src, "[ nop ]");
    }

    #[test]
    fn in_memory_read_missing() {
        let provider = InMemoryProvider::new(HashMap::new());
        let err = provider
            .read_source(Path::new("nope.robot"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn filesystem_read_missing() {
        let err = FileSystemProvider
            .read_source(Path::new("/definitely/not/here.robot"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
