//! `pdfrelink relink` command.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::context::ServiceContext;
use crate::document::Document;
use crate::relink::{self, RelinkReport};

/// Options for a relink run.
#[derive(Debug, Clone, Copy)]
pub struct RelinkOptions<'a> {
    /// Document to relink.
    pub document: &'a Path,
    /// Report without writing.
    pub dry_run: bool,
    /// Alternate destination for the relinked document.
    pub output: Option<&'a Path>,
}

/// Execute the `relink` command.
///
/// Mutations and the summary go to `out`; notices go to `warn`, one per
/// line. Notices never fail the command.
///
/// # Errors
///
/// Returns an error string if the document cannot be loaded or saved, if a
/// sibling PDF cannot be checked, or if writing to `out`/`warn` fails. A
/// failed check aborts before anything is written.
pub fn run_with_context(
    ctx: &ServiceContext,
    opts: RelinkOptions<'_>,
    out: &mut dyn Write,
    warn: &mut dyn Write,
) -> Result<RelinkReport, String> {
    let mut doc = Document::load(ctx.fs.as_ref(), opts.document).map_err(|e| e.to_string())?;
    let total = doc.placed_items.len();
    let exists = |path: &Path| {
        ctx.fs.exists(path).map_err(|e| format!("failed to check {}: {e}", path.display()))
    };

    let report = if opts.dry_run {
        relink::plan(&doc.placed_items, exists)?
    } else {
        relink::relink(&mut doc.placed_items, exists)?
    };

    let verb = if opts.dry_run { "Would relink" } else { "Relinked" };
    for change in &report.relinked {
        writeln!(out, "{verb} {} -> {}", change.from.display(), change.to.display())
            .map_err(|e| e.to_string())?;
    }
    for warning in report.warnings() {
        writeln!(warn, "{warning}").map_err(|e| e.to_string())?;
    }
    writeln!(out, "{verb} {} of {total} placed item(s).", report.mutated_count())
        .map_err(|e| e.to_string())?;

    if opts.dry_run {
        return Ok(report);
    }

    let destination = match opts.output {
        Some(path) => Some(path),
        None if report.mutated_count() > 0 => Some(opts.document),
        None => None,
    };
    if let Some(path) = destination {
        doc.save(ctx.fs.as_ref(), path).map_err(|e| e.to_string())?;
        info!(path = %path.display(), relinked = report.mutated_count(), "document written");
    }

    Ok(report)
}

/// Execute the `relink` command against stdout and stderr.
///
/// # Errors
///
/// Returns an error string if the document cannot be loaded or saved, or a
/// sibling PDF cannot be checked.
pub fn run(ctx: &ServiceContext, opts: RelinkOptions<'_>) -> Result<(), String> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with_context(ctx, opts, &mut stdout.lock(), &mut stderr.lock()).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemFs;

    const POSTER: &str = "\
name: poster
placed_items:
  - name: Logo
    file_path: /art/logo.png
  - file_path: /art/banner.PNG
  - file_path: /art/photo.jpg
";

    fn fixture() -> (MemFs, ServiceContext) {
        let fs = MemFs::with_files(&[("/docs/poster.yaml", POSTER), ("/art/logo.pdf", "%PDF")]);
        let ctx = ServiceContext::with_fs(Box::new(fs.clone()));
        (fs, ctx)
    }

    fn opts(document: &Path) -> RelinkOptions<'_> {
        RelinkOptions { document, dry_run: false, output: None }
    }

    #[test]
    fn relinks_and_saves_in_place() {
        let (fs, ctx) = fixture();
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());

        let report =
            run_with_context(&ctx, opts(Path::new("/docs/poster.yaml")), &mut out, &mut warn)
                .unwrap();

        assert_eq!(report.mutated_count(), 1);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Relinked /art/logo.png -> /art/logo.pdf"));
        assert!(out.contains("Relinked 1 of 3 placed item(s)."));
        assert_eq!(String::from_utf8(warn).unwrap(), "PDF file not found for: banner.PNG\n");

        let saved = fs.contents(Path::new("/docs/poster.yaml")).unwrap();
        assert!(saved.contains("/art/logo.pdf"));
        assert!(saved.contains("/art/banner.PNG"));
    }

    #[test]
    fn dry_run_leaves_document_untouched() {
        let (fs, ctx) = fixture();
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());
        let opts = RelinkOptions { dry_run: true, ..opts(Path::new("/docs/poster.yaml")) };

        let report = run_with_context(&ctx, opts, &mut out, &mut warn).unwrap();

        assert_eq!(report.mutated_count(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Would relink 1 of 3"));
        assert_eq!(fs.contents(Path::new("/docs/poster.yaml")).unwrap(), POSTER);
    }

    #[test]
    fn output_path_receives_document_in_its_own_format() {
        let (fs, ctx) = fixture();
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());
        let opts = RelinkOptions {
            output: Some(Path::new("/docs/poster.relinked.json")),
            ..opts(Path::new("/docs/poster.yaml"))
        };

        run_with_context(&ctx, opts, &mut out, &mut warn).unwrap();

        assert_eq!(fs.contents(Path::new("/docs/poster.yaml")).unwrap(), POSTER);
        let json = fs.contents(Path::new("/docs/poster.relinked.json")).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["placed_items"][0]["file_path"], "/art/logo.pdf");
        assert_eq!(doc["name"], "poster");
    }

    #[test]
    fn nothing_relinked_means_nothing_written() {
        let original = r#"{"placed_items":[{"file_path":"/a/x.png"}]}"#;
        let fs = MemFs::with_files(&[("/docs/p.json", original)]);
        let ctx = ServiceContext::with_fs(Box::new(fs.clone()));
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());

        let report =
            run_with_context(&ctx, opts(Path::new("/docs/p.json")), &mut out, &mut warn).unwrap();

        assert_eq!(report.mutated_count(), 0);
        assert_eq!(fs.contents(Path::new("/docs/p.json")).unwrap(), original);
    }

    #[test]
    fn empty_document_prints_notice() {
        let fs = MemFs::with_files(&[("/docs/empty.yaml", "placed_items: []\n")]);
        let ctx = ServiceContext::with_fs(Box::new(fs));
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());

        run_with_context(&ctx, opts(Path::new("/docs/empty.yaml")), &mut out, &mut warn).unwrap();

        assert_eq!(String::from_utf8(warn).unwrap(), "No linked items found in the document.\n");
        assert!(String::from_utf8(out).unwrap().contains("Relinked 0 of 0"));
    }

    #[test]
    fn failed_existence_check_aborts_without_writing() {
        let fs = MemFs::with_files(&[("/docs/poster.yaml", POSTER), ("/art/logo.pdf", "%PDF")])
            .deny("/art/banner.pdf");
        let ctx = ServiceContext::with_fs(Box::new(fs.clone()));
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());

        let err = run_with_context(&ctx, opts(Path::new("/docs/poster.yaml")), &mut out, &mut warn)
            .unwrap_err();

        assert_eq!(err, "failed to check /art/banner.pdf: Permission denied: /art/banner.pdf");
        assert!(warn.is_empty());
        assert_eq!(fs.contents(Path::new("/docs/poster.yaml")).unwrap(), POSTER);
    }

    #[test]
    fn unreadable_document_is_an_error() {
        let ctx = ServiceContext::with_fs(Box::new(MemFs::new()));
        let (mut out, mut warn) = (Vec::<u8>::new(), Vec::<u8>::new());

        let err = run_with_context(&ctx, opts(Path::new("/docs/gone.yaml")), &mut out, &mut warn)
            .unwrap_err();

        assert!(err.contains("failed to read document /docs/gone.yaml"));
    }
}
