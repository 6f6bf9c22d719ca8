//! Repointing linked PNGs at their sibling PDFs.
//!
//! The pass walks a document's placed items in order. Every item linked to a
//! `.png` (any case) is checked for a PDF of the same name in the same
//! directory; when the existence oracle confirms one, the link is rewritten
//! to it. Missing PDFs are reported as notices and leave the item untouched.
//! An oracle error ends the pass immediately.
//!
//! The oracle is injected so the pass runs the same against the real disk,
//! a recorded cassette, or a test fake.

pub mod candidate;
pub mod report;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use candidate::{candidate_path, is_png};
pub use report::{Notice, RelinkReport, Relinked};

use crate::document::PlacedItem;

/// Where a placed item stands with respect to relinking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// The item carries no file link.
    Embedded,
    /// The item links to something other than a PNG.
    Linked,
    /// The item links to a PNG and its sibling PDF exists.
    Relinkable(PathBuf),
    /// The item links to a PNG but no sibling PDF was found.
    MissingPdf(PathBuf),
}

impl LinkStatus {
    /// Short label used in listings.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Linked => "linked",
            Self::Relinkable(_) => "relinkable",
            Self::MissingPdf(_) => "missing-pdf",
        }
    }
}

/// Classifies a single placed item, querying `exists` at most once.
///
/// # Errors
///
/// Returns the oracle's error if the sibling PDF could not be checked.
pub fn link_status<F, E>(item: &PlacedItem, exists: &mut F) -> Result<LinkStatus, E>
where
    F: FnMut(&Path) -> Result<bool, E>,
{
    let Some(path) = item.file_path.as_deref() else {
        return Ok(LinkStatus::Embedded);
    };
    let Some(candidate) = candidate_path(path) else {
        return Ok(LinkStatus::Linked);
    };
    if exists(&candidate)? {
        Ok(LinkStatus::Relinkable(candidate))
    } else {
        Ok(LinkStatus::MissingPdf(candidate))
    }
}

/// Relinks every PNG-linked item whose sibling PDF exists.
///
/// Each mutation is applied as soon as its check succeeds. Running the pass
/// again on its own output is a no-op because relinked items no longer end
/// in `.png`.
///
/// # Errors
///
/// Stops at the first oracle error and returns it. Items relinked before the
/// failure keep their new paths.
pub fn relink<F, E>(items: &mut [PlacedItem], mut exists: F) -> Result<RelinkReport, E>
where
    F: FnMut(&Path) -> Result<bool, E>,
{
    let mut report = RelinkReport::default();

    for (index, item) in items.iter_mut().enumerate() {
        match link_status(item, &mut exists)? {
            LinkStatus::Relinkable(to) => {
                if let Some(from) = item.file_path.replace(to.clone()) {
                    debug!(index, from = %from.display(), to = %to.display(), "relinked");
                    report.relinked.push(Relinked { index, from, to });
                }
            }
            LinkStatus::MissingPdf(candidate) => {
                debug!(index, candidate = %candidate.display(), "sibling pdf not found");
                report.notices.push(missing_sibling(item));
            }
            LinkStatus::Embedded | LinkStatus::Linked => {}
        }
    }

    if items.is_empty() {
        report.notices.push(Notice::EmptyDocument);
    }

    Ok(report)
}

/// Computes what [`relink`] would do without touching the items.
///
/// # Errors
///
/// Returns the first oracle error.
pub fn plan<F, E>(items: &[PlacedItem], mut exists: F) -> Result<RelinkReport, E>
where
    F: FnMut(&Path) -> Result<bool, E>,
{
    let mut report = RelinkReport::default();

    for (index, item) in items.iter().enumerate() {
        match link_status(item, &mut exists)? {
            LinkStatus::Relinkable(to) => {
                if let Some(from) = item.file_path.clone() {
                    report.relinked.push(Relinked { index, from, to });
                }
            }
            LinkStatus::MissingPdf(_) => report.notices.push(missing_sibling(item)),
            LinkStatus::Embedded | LinkStatus::Linked => {}
        }
    }

    if items.is_empty() {
        report.notices.push(Notice::EmptyDocument);
    }

    Ok(report)
}

fn missing_sibling(item: &PlacedItem) -> Notice {
    let file_name = item
        .file_path
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Notice::MissingSibling { file_name }
}
