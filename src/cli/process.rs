//! Process command implementation.
//!
//! Runs the offline logo pipeline against the current project: strips the
//! near-white background, squares the artwork, and writes the three fixed
//! asset sizes under the working directory.

use std::path::PathBuf;

use clap::Args;

use crate::error::{EmblemError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{self, MEDIUM_SIZE, PRIMARY_SIZE, SMALL_SIZE};

/// Process a brand logo into transparent PNG assets
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Source image (PNG or JPEG)
    pub input: Option<PathBuf>,
}

pub fn run(args: ProcessArgs, printer: &Printer) -> Result<()> {
    // Checked here instead of with a clap `required`: a bare
    // `emblem process` must exit 1, not clap's usage status 2.
    let input = args.input.ok_or_else(|| EmblemError::Pipeline {
        message: "No input image given".to_string(),
        help: Some("Usage: emblem process <path/to/logo.png>".to_string()),
    })?;

    printer.status("Processing", &display_path(&input));

    let root = std::env::current_dir()?;
    let assets = pipeline::process_logo(&input, &root)?;

    for (path, size) in [
        (&assets.primary, PRIMARY_SIZE),
        (&assets.medium, MEDIUM_SIZE),
        (&assets.small, SMALL_SIZE),
    ] {
        let dims = printer.dim(&format!("{}x{}", size, size));
        printer.info("Written", &format!("{} {}", display_path(path), dims));
    }
    printer.success("Finished", &plural(assets.all().len(), "asset", "assets"));

    // Machine-readable path list on stdout.
    for path in assets.all() {
        println!("{}", display_path(path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_argument() {
        let err = run(ProcessArgs { input: None }, &Printer::new()).unwrap_err();
        assert!(matches!(err, EmblemError::Pipeline { .. }));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ProcessArgs {
            input: Some(dir.path().join("absent.png")),
        };
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, EmblemError::Io { .. }));
    }
}
