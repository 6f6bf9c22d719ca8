//! Errors raised while loading or saving a document.

use std::path::PathBuf;

/// Boxed cause returned by the filesystem port.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to load or save a document file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file extension does not name a supported format.
    #[error("unsupported document format for {}: expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },
    /// The document could not be read.
    #[error("failed to read document {}: {source}", path.display())]
    Read {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: PortError,
    },
    /// The document contents could not be parsed.
    #[error("failed to parse document {}: {message}", path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// The document could not be serialized.
    #[error("failed to serialize document {}: {message}", path.display())]
    Serialize {
        /// Destination path.
        path: PathBuf,
        /// Serializer diagnostic.
        message: String,
    },
    /// The document could not be written.
    #[error("failed to write document {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: PortError,
    },
}
