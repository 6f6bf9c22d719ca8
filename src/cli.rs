//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `pdfrelink`.
#[derive(Debug, Parser)]
#[command(
    name = "pdfrelink",
    version,
    about = "Relink placed PNG images to their sibling PDF exports"
)]
pub struct Cli {
    /// Enable debug diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Repoint linked PNGs at same-named PDFs that exist beside them.
    Relink {
        /// Document file (.json, .yaml or .yml).
        document: PathBuf,
        /// Report what would change without writing anything.
        #[arg(long)]
        dry_run: bool,
        /// Write the relinked document here instead of in place.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List placed items and whether each can be relinked.
    Links {
        /// Document file (.json, .yaml or .yml).
        document: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_relink_subcommand() {
        let cli = Cli::parse_from(["pdfrelink", "relink", "poster.yaml"]);
        assert!(!cli.verbose);
        match cli.command {
            Command::Relink { document, dry_run, output } => {
                assert_eq!(document, PathBuf::from("poster.yaml"));
                assert!(!dry_run);
                assert!(output.is_none());
            }
            Command::Links { .. } => panic!("expected relink"),
        }
    }

    #[test]
    fn parses_relink_flags() {
        let cli = Cli::parse_from([
            "pdfrelink",
            "relink",
            "poster.json",
            "--dry-run",
            "-o",
            "out.yaml",
            "-v",
        ]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Relink { dry_run: true, output: Some(ref p), .. } if p == &PathBuf::from("out.yaml")
        ));
    }

    #[test]
    fn parses_links_subcommand() {
        let cli = Cli::parse_from(["pdfrelink", "links", "poster.yaml"]);
        assert!(matches!(cli.command, Command::Links { .. }));
    }

    #[test]
    fn relink_requires_document() {
        assert!(Cli::try_parse_from(["pdfrelink", "relink"]).is_err());
    }
}
