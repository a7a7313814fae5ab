//! Dataset Shape Validation

use crate::error::PrepError;
use crate::masking::MaskingStrategy;
use ndarray::Array2;
use rand::Rng;
use tracing::debug;

/// Length of the longest instance
pub fn max_length(instances: &[Vec<f64>]) -> usize {
    instances.iter().map(Vec::len).max().unwrap_or(0)
}

/// Build an `n × m` matrix from equal-length, finite instances
pub fn to_matrix(instances: &[Vec<f64>]) -> Result<Array2<f64>, PrepError> {
    let expected = instances.first().map(Vec::len).ok_or(PrepError::Empty)?;
    if expected == 0 {
        return Err(PrepError::Empty);
    }

    let mut flat = Vec::with_capacity(instances.len() * expected);
    for (row, instance) in instances.iter().enumerate() {
        if instance.len() != expected {
            return Err(PrepError::Ragged {
                row,
                expected,
                actual: instance.len(),
            });
        }
        if let Some(col) = instance.iter().position(|v| !v.is_finite()) {
            return Err(PrepError::NonFinite { row, col });
        }
        flat.extend_from_slice(instance);
    }

    Array2::from_shape_vec((instances.len(), expected), flat).map_err(|_| PrepError::Empty)
}

/// Pad every instance to `target_len` with `strategy`, then validate
pub fn pad_to_matrix<R: Rng + ?Sized>(
    instances: &[Vec<f64>],
    strategy: MaskingStrategy,
    target_len: usize,
    rng: &mut R,
) -> Result<Array2<f64>, PrepError> {
    let padded: Vec<Vec<f64>> = instances
        .iter()
        .map(|instance| {
            let mut instance = instance.clone();
            strategy.extend(&mut instance, target_len, rng);
            instance
        })
        .collect();

    debug!(
        "Padded {} instances to {} timesteps using {} masking",
        padded.len(),
        target_len,
        strategy.as_str()
    );

    to_matrix(&padded)
}
