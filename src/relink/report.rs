//! Outcome of a relink pass.

use std::fmt;
use std::path::PathBuf;

/// A user-facing message produced by a relink pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A linked PNG has no PDF beside it.
    MissingSibling {
        /// File name of the PNG as it appears in the link.
        file_name: String,
    },
    /// The document has no placed items at all.
    EmptyDocument,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSibling { file_name } => write!(f, "PDF file not found for: {file_name}"),
            Self::EmptyDocument => f.write_str("No linked items found in the document."),
        }
    }
}

/// A single link that was (or would be) repointed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relinked {
    /// Position of the item in the document's placed-item list.
    pub index: usize,
    /// The PNG path the item linked to before the pass.
    pub from: PathBuf,
    /// The sibling PDF path it links to afterwards.
    pub to: PathBuf,
}

/// Result of relinking a document's placed items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelinkReport {
    /// Links repointed to a sibling PDF, in document order.
    pub relinked: Vec<Relinked>,
    /// Notices in the order they were raised.
    pub notices: Vec<Notice>,
}

impl RelinkReport {
    /// Number of placed items whose link was repointed.
    #[must_use]
    pub fn mutated_count(&self) -> usize {
        self.relinked.len()
    }

    /// Notices rendered as the messages shown to the user.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.notices.iter().map(ToString::to_string).collect()
    }
}
