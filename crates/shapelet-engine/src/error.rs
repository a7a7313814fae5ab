//! Shapelet Error Types

use rolling_window::WindowError;
use series_prep::PrepError;
use thiserror::Error;

/// Errors during shapelet fitting and transformation
#[derive(Debug, Error)]
pub enum ShapeletError {
    /// Candidate percentage outside (0, 1]
    #[error("keep_candidates_percentage must be in (0, 1], got {0}")]
    InvalidPercentage(f64),

    /// Window longer than the series it is taken from
    #[error("Invalid window length {length} for series of length {series_length}")]
    InvalidWindowLength { length: usize, series_length: usize },

    /// Series too short to hold any candidate length
    #[error("Series length {length} is too short, at least {minimum} timesteps required")]
    SeriesTooShort { length: usize, minimum: usize },

    /// No series or no channels
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Transform called before a successful fit
    #[error("Extractor is not fit")]
    NotFitted,

    /// Univariate shapelets applied to multivariate data or vice versa
    #[error("Layout mismatch: shapelets are {expected}, dataset is {actual}")]
    LayoutMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Transform data has a different channel count than the fit data
    #[error("Expected {expected} channels, got {actual}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    /// Shapelet channel not present in the dataset
    #[error("Channel {channel} out of range for dataset with {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Different number of sensors than at fit time
    #[error("Expected {expected} sensors, got {actual}")]
    SensorCountMismatch { expected: usize, actual: usize },

    /// Sensors disagree on the number of instances
    #[error("Sensor {sensor} has {actual} instances, expected {expected}")]
    InstanceCountMismatch {
        sensor: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Data preparation failed: {0}")]
    Prep(#[from] PrepError),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl From<WindowError> for ShapeletError {
    fn from(err: WindowError) -> Self {
        match err {
            WindowError::InvalidLength { width, len } => ShapeletError::InvalidWindowLength {
                length: width,
                series_length: len,
            },
        }
    }
}
