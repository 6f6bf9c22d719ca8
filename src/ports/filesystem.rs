//! Filesystem port for document I/O and sibling lookups.

use std::path::Path;

/// Provides filesystem access for reading and writing documents and for
/// checking whether a sibling PDF exists.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists on the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined (permission denied,
    /// a symlink loop, etc.). Callers must not treat that as "absent".
    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
