//! Shapelet Feature Engine
//!
//! Samples representative subsequences (shapelets) from a time-series
//! collection and turns every series into a vector of minimum distances to
//! those shapelets, following the ultra-fast shapelets scheme.

mod allocation;
mod candidates;
mod config;
mod dataset;
mod distance;
mod error;
mod extractor;
mod per_sensor;
mod sampler;

pub use allocation::{candidate_budget, LengthAllocation, FIRST_SAMPLED_LENGTH};
pub use candidates::{candidate_count, length_weights, MIN_WEIGHTED_LENGTH};
pub use crate::config::{ShapeletConfig, ENV_PREFIX};
pub use dataset::Dataset;
pub use distance::{min_raw_distance, min_znorm_distance, shapelet_transform, EPSILON};
pub use error::ShapeletError;
pub use extractor::{FittedState, UltraFastShapelets};
pub use per_sensor::PerSensorShapelets;
pub use sampler::{sample_shapelets, Shapelet};
pub use series_prep::MaskingStrategy;
