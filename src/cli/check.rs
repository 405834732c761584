//! Check command implementation.
//!
//! Verifies that an existing stylesheet has the star field structure:
//! one container, every layer with its `:after` copy, the configured entry
//! counts and colours, and one keyframe loop.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::check::check_stylesheet;
use crate::error::{Result, StarfieldError};
use crate::output::{display_path, plural, Printer};
use crate::writer::DEFAULT_OUTPUT;

/// Check the structure of an existing stylesheet
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Stylesheet to check
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub file: PathBuf,

    /// Project file with tier overrides (default: ./starfield.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let display = display_path(&args.file);

    let css = fs::read_to_string(&args.file).map_err(|e| StarfieldError::Io {
        path: args.file.clone(),
        message: format!("Failed to read stylesheet: {}", e),
    })?;

    printer.status("Checking", &printer.cyan(&display));
    let report = check_stylesheet(&css, &config.tiers())?;

    for layer in &report.layers {
        let detail = [layer.width.as_deref(), layer.animation.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        printer.info(
            "Layer",
            &format!(
                "{} {} {}",
                layer.selector,
                plural(layer.points.len(), "star", "stars"),
                printer.dim(&detail)
            ),
        );
    }

    if !report.is_ok() {
        for problem in &report.problems {
            printer.error("Problem", problem);
        }
        return Err(StarfieldError::Check {
            message: format!(
                "{} in {}",
                plural(report.problems.len(), "problem", "problems"),
                display
            ),
            help: Some("Regenerate the stylesheet with `starfield`".to_string()),
        });
    }

    printer.status(
        "Verified",
        &format!("{} ({})", display, plural(report.layers.len(), "layer", "layers")),
    );

    Ok(())
}
