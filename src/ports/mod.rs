//! Port traits defining external boundaries.
//!
//! The only boundary the relinker crosses is the filesystem: reading and
//! writing the document, and asking whether a sibling PDF exists.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
