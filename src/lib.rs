//! starfield - Animated star field stylesheet generator
//!
//! Scatters three tiers of stars over a square field as CSS `box-shadow`
//! lists and assembles them into a stylesheet with a seamless scroll loop.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod sampler;
pub mod template;
pub mod types;
pub mod writer;

pub use check::{check_stylesheet, CheckReport, LayerSummary};
pub use config::{Config, CONFIG_FILENAME};
pub use error::{Result, StarfieldError};
pub use generator::Generator;
pub use sampler::{sample_points, sample_shadows};
pub use template::{render_stylesheet, Layer};
pub use types::{Colour, ShadowPoint, Tier, TierKind, FIELD_EXTENT};
pub use writer::{write_stylesheet, DEFAULT_OUTPUT};
