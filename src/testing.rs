//! In-memory filesystem for unit tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::FileSystem;

/// In-memory filesystem for exercising documents and commands without
/// touching disk. Clones share the same files.
#[derive(Clone)]
pub(crate) struct MemFs {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    unreadable: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemFs {
    pub(crate) fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            unreadable: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Makes existence checks on `path` fail as if permission were denied.
    pub(crate) fn deny(self, path: &str) -> Self {
        self.unreadable.lock().unwrap().insert(PathBuf::from(path));
        self
    }

    pub(crate) fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        {
            let mut map = fs.files.lock().unwrap();
            for (path, contents) in files {
                map.insert(PathBuf::from(path), (*contents).to_string());
            }
        }
        fs
    }

    pub(crate) fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.contents(path).ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if self.unreadable.lock().unwrap().contains(path) {
            return Err(format!("Permission denied: {}", path.display()).into());
        }
        Ok(self.files.lock().unwrap().contains_key(path))
    }
}
