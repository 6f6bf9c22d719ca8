//! Sibling-PDF path derivation.

use std::path::{Path, PathBuf};

const PNG_EXT: &str = ".png";
const PDF_EXT: &str = ".pdf";

/// Returns `true` if the path ends in `.png`, ignoring case.
///
/// The whole path string is tested, so `logo.png/` and `logo.png/.` do not
/// match. Paths that are not valid UTF-8 never match.
#[must_use]
pub fn is_png(path: &Path) -> bool {
    path.to_str().is_some_and(|s| s.to_ascii_lowercase().ends_with(PNG_EXT))
}

/// Derives the sibling PDF path for a linked PNG.
///
/// The first case-insensitive `.png` in the file name is replaced with `.pdf`
/// and the result is joined back onto the original directory, so
/// `my.png.backup.png` becomes `my.pdf.backup.png`. Returns `None` when the
/// path is not a PNG.
#[must_use]
pub fn candidate_path(path: &Path) -> Option<PathBuf> {
    if !is_png(path) {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    // ASCII lowercasing keeps byte offsets aligned with `name`.
    let at = name.to_ascii_lowercase().find(PNG_EXT)?;
    let renamed = format!("{}{PDF_EXT}{}", &name[..at], &name[at + PNG_EXT.len()..]);
    Some(path.with_file_name(renamed))
}
