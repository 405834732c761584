//! Generate command implementation.
//!
//! Samples the star tiers, assembles the stylesheet and writes it out.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generator::Generator;
use crate::output::{display_path, plural, Printer};

/// Generate the star field stylesheet
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output file (default: src/stars.css)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Project file (default: ./starfield.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    // Flags take precedence over the project file
    let output = args.output.unwrap_or_else(|| config.output.clone());
    let seed = args.seed.or(config.seed);

    let generator = Generator::new(config.tiers());
    printer.status(
        "Generating",
        &format!(
            "{} across {}",
            plural(generator.star_count(), "star", "stars"),
            plural(generator.tiers().len(), "layer", "layers")
        ),
    );

    generator.write_to(&output, seed)?;

    if let Some(seed) = seed {
        printer.info("Seeded", &printer.dim(&seed.to_string()));
    }
    printer.status("Wrote", &printer.cyan(&display_path(&output)));

    Ok(())
}
