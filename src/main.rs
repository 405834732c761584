use clap::Parser;
use miette::Result;
use starfield::cli::{Cli, Commands};
use starfield::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Some(Commands::Generate(args)) => starfield::cli::generate::run(args, &printer)?,
        Some(Commands::Check(args)) => starfield::cli::check::run(args, &printer)?,
        Some(Commands::Completions(args)) => starfield::cli::completions::run(args)?,
        None => starfield::cli::generate::run(cli.generate, &printer)?,
    }

    Ok(())
}
