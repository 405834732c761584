use miette::Diagnostic;
use thiserror::Error;

/// Main error type for starfield operations
#[derive(Error, Diagnostic, Debug)]
pub enum StarfieldError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(starfield::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(starfield::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(starfield::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(starfield::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, StarfieldError>;
