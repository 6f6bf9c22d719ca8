//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(path.try_exists()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/poster.yaml");

        LiveFileSystem.write(&path, "placed_items: []\n").unwrap();

        assert!(LiveFileSystem.exists(&path).unwrap());
        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "placed_items: []\n");
    }

    #[test]
    fn missing_file_does_not_exist_and_fails_to_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.pdf");

        assert!(!LiveFileSystem.exists(&path).unwrap());
        assert!(LiveFileSystem.read_to_string(&path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_an_error_not_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.pdf");
        std::os::unix::fs::symlink(&path, &path).unwrap();

        assert!(LiveFileSystem.exists(&path).is_err());
    }
}
