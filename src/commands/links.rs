//! `pdfrelink links` command.

use std::io::Write;
use std::path::Path;

use crate::context::ServiceContext;
use crate::document::Document;
use crate::relink::{link_status, Notice};

/// Execute the `links` command, writing one line per placed item.
///
/// # Errors
///
/// Returns an error string if the document cannot be loaded, a sibling PDF
/// cannot be checked, or output fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    document: &Path,
    out: &mut dyn Write,
    warn: &mut dyn Write,
) -> Result<(), String> {
    let doc = Document::load(ctx.fs.as_ref(), document).map_err(|e| e.to_string())?;

    if doc.placed_items.is_empty() {
        return writeln!(warn, "{}", Notice::EmptyDocument).map_err(|e| e.to_string());
    }

    let mut exists = |path: &Path| {
        ctx.fs.exists(path).map_err(|e| format!("failed to check {}: {e}", path.display()))
    };
    for (index, item) in doc.placed_items.iter().enumerate() {
        let status = link_status(item, &mut exists)?;
        let target = item
            .file_path
            .as_deref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        writeln!(out, "{index:>3}  {:<11}  {:<20}  {target}", status.label(), item.label())
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Execute the `links` command against stdout and stderr.
///
/// # Errors
///
/// Returns an error string if the document cannot be loaded.
pub fn run(ctx: &ServiceContext, document: &Path) -> Result<(), String> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with_context(ctx, document, &mut stdout.lock(), &mut stderr.lock())
}
