use clap::Parser;
use emblem::cli::{Cli, Commands};
use emblem::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Process(args) => emblem::cli::process::run(args, &printer)?,
        Commands::Extract(args) => emblem::cli::extract::run(args, &printer)?,
        Commands::Theme(args) => emblem::cli::theme::run(args, &printer)?,
        Commands::Completions(args) => emblem::cli::completions::run(args)?,
    }

    Ok(())
}
