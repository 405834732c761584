pub mod check;
pub mod completions;
pub mod generate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// starfield - Animated star field stylesheet generator
#[derive(Parser, Debug)]
#[command(name = "starfield")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Generate options used when no subcommand is given
    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the star field stylesheet (the default)
    Generate(generate::GenerateArgs),

    /// Check the structure of an existing stylesheet
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load an explicit config file, or discover one in the working directory.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_generates() {
        let cli = Cli::try_parse_from(["starfield"]).unwrap();

        assert!(cli.command.is_none());
        assert!(cli.generate.output.is_none());
        assert!(cli.generate.seed.is_none());
    }

    #[test]
    fn test_top_level_flags() {
        let cli = Cli::try_parse_from(["starfield", "-o", "public/stars.css", "--seed", "9"]).unwrap();

        assert_eq!(cli.generate.output, Some(PathBuf::from("public/stars.css")));
        assert_eq!(cli.generate.seed, Some(9));
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["starfield", "check", "dist/stars.css"]).unwrap();

        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.file, PathBuf::from("dist/stars.css")),
            other => panic!("expected check, got {:?}", other),
        }
    }
}
