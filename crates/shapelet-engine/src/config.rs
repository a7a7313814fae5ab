//! Extractor configuration

use crate::error::ShapeletError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use series_prep::MaskingStrategy;
use std::path::Path;

/// Prefix for environment overrides, e.g. `SHAPELETS_RANDOM_SEED=7`
pub const ENV_PREFIX: &str = "SHAPELETS";

/// Shapelet extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeletConfig {
    /// Fraction of the series count used as the shapelet budget, in (0, 1]
    pub keep_candidates_percentage: f64,

    /// Seed for reproducible sampling; `None` draws from OS entropy
    pub random_seed: Option<u64>,

    /// Padding for ragged instances (per-sensor extraction only)
    pub masking: MaskingStrategy,
}

impl Default for ShapeletConfig {
    fn default() -> Self {
        Self {
            keep_candidates_percentage: 0.1,
            random_seed: None,
            masking: MaskingStrategy::Zero,
        }
    }
}

impl ShapeletConfig {
    /// Create sparse config (few shapelets, fast transform)
    pub fn sparse() -> Self {
        Self {
            keep_candidates_percentage: 0.05,
            ..Default::default()
        }
    }

    /// Create dense config (one shapelet per series)
    pub fn dense() -> Self {
        Self {
            keep_candidates_percentage: 1.0,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_percentage(mut self, keep_candidates_percentage: f64) -> Self {
        self.keep_candidates_percentage = keep_candidates_percentage;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_masking(mut self, masking: MaskingStrategy) -> Self {
        self.masking = masking;
        self
    }

    /// Reject percentages outside (0, 1], including NaN
    pub fn validate(&self) -> Result<(), ShapeletError> {
        let pct = self.keep_candidates_percentage;
        if pct > 0.0 && pct <= 1.0 {
            Ok(())
        } else {
            Err(ShapeletError::InvalidPercentage(pct))
        }
    }

    /// Load from a config file, overridden by `SHAPELETS_*` environment variables
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShapeletError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Fresh generator for one fit or transform run
    pub(crate) fn rng(&self) -> ChaCha8Rng {
        match self.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
