//! Project configuration (starfield.yaml) parsing.
//!
//! Every field is optional. Without a project file the generator writes the
//! three built-in tiers to `src/stars.css` from an unseeded source.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarfieldError};
use crate::types::{Colour, Tier, TierKind};
use crate::writer::DEFAULT_OUTPUT;

/// Project file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "starfield.yaml";

/// Project configuration loaded from starfield.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Stylesheet output path.
    pub output: PathBuf,

    /// Seed for reproducible output.
    pub seed: Option<u64>,

    /// Per-tier count and colour overrides.
    pub tiers: TierOverrides,
}

/// Overrides for each of the three tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierOverrides {
    pub small: Option<TierOverride>,
    pub medium: Option<TierOverride>,
    pub large: Option<TierOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierOverride {
    pub count: Option<usize>,
    pub colour: Option<Colour>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            tiers: TierOverrides::default(),
        }
    }
}

impl Config {
    /// Load configuration from a starfield.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StarfieldError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `starfield.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| StarfieldError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// The three tiers with overrides applied, in stylesheet order.
    pub fn tiers(&self) -> [Tier; 3] {
        TierKind::ALL.map(|kind| {
            let base = Tier::builtin(kind);
            match self.tiers.get(kind) {
                Some(o) => Tier::new(
                    kind,
                    o.count.unwrap_or(base.count),
                    o.colour.unwrap_or(base.colour),
                ),
                None => base,
            }
        })
    }
}

impl TierOverrides {
    pub fn get(&self, kind: TierKind) -> Option<&TierOverride> {
        match kind {
            TierKind::Small => self.small.as_ref(),
            TierKind::Medium => self.medium.as_ref(),
            TierKind::Large => self.large.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: public/stars.css").unwrap();

        assert_eq!(config.output, PathBuf::from("public/stars.css"));
        assert!(config.seed.is_none());
        assert_eq!(config.tiers(), Tier::defaults());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
output: assets/stars.css
seed: 42
tiers:
  small:
    count: 350
  large:
    count: 10
    colour: "#ffffff"
"##;
        let config = Config::parse(yaml).unwrap();
        let [small, medium, large] = config.tiers();

        assert_eq!(config.output, PathBuf::from("assets/stars.css"));
        assert_eq!(config.seed, Some(42));
        assert_eq!((small.count, small.colour), (350, Colour::GOLD));
        assert_eq!(medium, Tier::builtin(TierKind::Medium));
        assert_eq!((large.count, large.colour), (10, Colour::rgb(255, 255, 255)));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.output, PathBuf::from("src/stars.css"));
        assert!(config.seed.is_none());
        assert_eq!(config.tiers, TierOverrides::default());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_colour_is_config_error() {
        let err = Config::parse("tiers:\n  small:\n    colour: \"#nothex\"\n").unwrap_err();
        assert!(matches!(err, StarfieldError::Config { .. }));
    }

    #[test]
    fn test_signed_hex_colour_is_config_error() {
        let err = Config::parse("tiers:\n  large:\n    colour: \"#+f+f+f\"\n").unwrap_err();
        assert!(matches!(err, StarfieldError::Config { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::parse("outptu: stars.css").is_err());
        assert!(Config::parse("tiers:\n  huge:\n    count: 1\n").is_err());
    }

    #[test]
    fn test_discover_missing_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "seed: 7\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, PathBuf::from("src/stars.css"));
    }
}
