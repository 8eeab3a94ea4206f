//! Extract command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::extract::dominant_colour;
use crate::loader;
use crate::output::{display_path, Printer};

/// Sample the dominant colour from an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image to sample
    #[arg(required = true)]
    pub image: PathBuf,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let display = display_path(&args.image);
    let image = loader::load_rgba(&args.image)?;

    match dominant_colour(&image) {
        Some(colour) => {
            printer.status("Sampled", &format!("{} from {}", colour, display));
            println!("{}", colour);
        }
        None => {
            printer.warning(
                "Skipped",
                &format!("{} is transparent or background only", display),
            );
        }
    }

    Ok(())
}
