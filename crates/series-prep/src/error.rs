//! Preparation Error Types

use thiserror::Error;

/// Errors while shaping raw instances into a dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrepError {
    /// No instances, or instances without timesteps
    #[error("Dataset is empty")]
    Empty,

    /// Instance length differs from the first instance
    #[error("Instance {row} has {actual} timesteps, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite timestep value
    #[error("Non-finite value at instance {row}, timestep {col}")]
    NonFinite { row: usize, col: usize },
}
