//! Masking Strategies for Ragged Series

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How timesteps are filled when an instance is extended to a target length.
///
/// Padding is always prepended, so the most recent timesteps keep their
/// position at the end of the series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskingStrategy {
    /// Pad with zeros
    #[default]
    Zero,
    /// Pad with the first observed value
    FirstValue,
    /// Pad with values drawn uniformly between the instance min and max
    RandomValue,
}

impl MaskingStrategy {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskingStrategy::Zero => "zero",
            MaskingStrategy::FirstValue => "first_value",
            MaskingStrategy::RandomValue => "random_value",
        }
    }

    /// Prepend values until `instance` has `target_len` timesteps.
    ///
    /// Instances already at or beyond the target are left untouched. Only
    /// [`MaskingStrategy::RandomValue`] draws from `rng`.
    pub fn extend<R: Rng + ?Sized>(&self, instance: &mut Vec<f64>, target_len: usize, rng: &mut R) {
        let missing = target_len.saturating_sub(instance.len());
        if missing == 0 {
            return;
        }

        let padding: Vec<f64> = match self {
            MaskingStrategy::Zero => vec![0.0; missing],
            MaskingStrategy::FirstValue => {
                let first = instance.first().copied().unwrap_or(0.0);
                vec![first; missing]
            }
            MaskingStrategy::RandomValue => {
                if instance.is_empty() {
                    vec![0.0; missing]
                } else {
                    let min = instance.iter().copied().fold(f64::MAX, f64::min);
                    let max = instance.iter().copied().fold(f64::MIN, f64::max);
                    (0..missing)
                        .map(|_| if min < max { rng.gen_range(min..max) } else { min })
                        .collect()
                }
            }
        };

        instance.splice(0..0, padding);
    }
}
