//! Rolling Window Views
//!
//! Provides zero-copy, restartable views over every contiguous subsequence of a series.

mod window;

pub use window::{window_count, RollingWindows};

use thiserror::Error;

/// Errors when building a rolling window view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("Invalid window length {width} for series of length {len}")]
    InvalidLength { width: usize, len: usize },
}
