//! Command dispatch and handlers.

pub mod links;
pub mod relink;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Environment variable naming a cassette file to record the run into.
pub const RECORD_ENV: &str = "PDFRELINK_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `PDFRELINK_RECORD` is set to a file path, every filesystem
/// interaction is recorded to a cassette at that path.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = match env::var_os(RECORD_ENV) {
        Some(path) => {
            let (ctx, session) = ServiceContext::recording_at(PathBuf::from(path));
            (ctx, Some(session))
        }
        None => (ServiceContext::live(), None),
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Relink { document, dry_run, output } => relink::run(
            ctx,
            relink::RelinkOptions {
                document,
                dry_run: *dry_run,
                output: output.as_deref(),
            },
        ),
        Command::Links { document } => links::run(ctx, document),
    }
}

/// Finish a recording session and print the cassette path.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let path = session.finish()?;
    eprintln!("Recording saved to: {}", path.display());
    Ok(())
}
