//! Generation pipeline: sample, assemble, write.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::sampler::sample_shadows;
use crate::template::{render_stylesheet, Layer};
use crate::types::Tier;
use crate::writer::write_stylesheet;

/// Star field stylesheet generator.
#[derive(Debug, Clone)]
pub struct Generator {
    tiers: Vec<Tier>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Tier::defaults())
    }
}

impl Generator {
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Self {
        Self {
            tiers: tiers.into_iter().collect(),
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Total stars per layer set (the `:after` copies are not counted).
    pub fn star_count(&self) -> usize {
        self.tiers.iter().map(|t| t.count).sum()
    }

    /// Generate a stylesheet from the given random source.
    ///
    /// Each tier is sampled once; the layer and its `:after` copy share the
    /// same shadow list.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let shadows: Vec<String> = self
            .tiers
            .iter()
            .map(|tier| sample_shadows(&mut *rng, tier.count, tier.colour))
            .collect();

        let layers: Vec<Layer> = self
            .tiers
            .iter()
            .zip(&shadows)
            .map(|(tier, shadows)| Layer::new(tier, shadows))
            .collect();

        render_stylesheet(&layers)
    }

    /// Generate a reproducible stylesheet.
    pub fn generate_seeded(&self, seed: u64) -> String {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate from an entropy-seeded source; output differs between runs.
    pub fn generate_random(&self) -> String {
        self.generate(&mut StdRng::from_entropy())
    }

    /// Generate and write to `path`, seeded when `seed` is given.
    pub fn write_to(&self, path: &Path, seed: Option<u64>) -> Result<()> {
        let css = match seed {
            Some(seed) => self.generate_seeded(seed),
            None => self.generate_random(),
        };
        write_stylesheet(path, &css)
    }
}
