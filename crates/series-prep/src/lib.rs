//! Series Preparation
//!
//! Pads ragged sensor series to a common length and validates that a dataset
//! is rectangular and finite before feature extraction.

mod error;
mod masking;
mod validator;

pub use error::PrepError;
pub use masking::MaskingStrategy;
pub use validator::{max_length, pad_to_matrix, to_matrix};
