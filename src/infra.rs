//! Infrastructure traits for abstracting I/O operations.
//!
//! Config loading and saving go through [`FileSystem`] so they can be tested
//! against an in-memory implementation.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_write_and_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let fs = RealFileSystem;
        fs.write(&path, "hello").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
        assert!(fs.exists(&path));
    }

    #[test]
    fn test_real_filesystem_read_nonexistent_file_returns_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");

        let err = RealFileSystem.read_to_string(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!RealFileSystem.exists(&path));
    }
}
