//! Recording session owning the filesystem cassette recorder.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// Owns the shared recorder for one recorded run.
///
/// The recording adapter holds a clone of the `Arc`; it must be dropped
/// before [`RecordingSession::finish`] can reclaim the recorder.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Creates a session that will write its cassette to `path`.
    ///
    /// The cassette name is the file stem of `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map_or_else(|| "pdfrelink".to_string(), |s| s.to_string_lossy().into_owned());
        Self { fs: Arc::new(Mutex::new(CassetteRecorder::new(path, name))) }
    }

    /// Finish the recorder and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording adapter is still alive, the lock was
    /// poisoned, or the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.fs)
            .map_err(|_| "Recording adapter for fs still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for fs poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write fs cassette: {e}"))
    }
}
