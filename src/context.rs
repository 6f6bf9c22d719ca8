//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects a command needs.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Filesystem for document I/O and sibling lookups.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context around an arbitrary filesystem implementation.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Creates a live context that records every filesystem interaction.
    ///
    /// The cassette is written to `path` when the returned session is
    /// finished, which must happen after this context is dropped.
    #[must_use]
    pub fn recording_at(path: PathBuf) -> (Self, RecordingSession) {
        let session = RecordingSession::new(path);
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), session.fs.clone());
        (Self { fs: Box::new(fs) }, session)
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        Ok(Self { fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))) })
    }
}
