//! Core library entry for the `pdfrelink` CLI.
//!
//! Repoints a document's placed PNG links at same-named PDFs that exist
//! beside them. The relinking pass lives in [`relink`]; everything else is
//! the document model, the filesystem port it runs against, and the CLI.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod document;
pub mod logging;
pub mod ports;
pub mod relink;

#[cfg(test)]
pub(crate) mod testing;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init_logging(cli.verbose);
    commands::dispatch(&cli.command)
}
