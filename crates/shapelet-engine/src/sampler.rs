//! Shapelet Sampling

use crate::allocation::LengthAllocation;
use crate::dataset::Dataset;
use crate::error::ShapeletError;
use ndarray::ArrayView1;
use rand::Rng;
use rolling_window::RollingWindows;
use serde::{Deserialize, Serialize};

/// Subsequence copied out of a training series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shapelet {
    /// Subsequence values
    values: Vec<f64>,
    /// Source channel (multivariate data only)
    channel: Option<usize>,
    /// Index of the source series
    series: usize,
    /// Start offset within the source series
    offset: usize,
}

impl Shapelet {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn channel(&self) -> Option<usize> {
        self.channel
    }

    pub fn series(&self) -> usize {
        self.series
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Draw `allocation.total()` shapelets from `data`.
///
/// Lengths are visited in ascending order. Each draw picks the series, then
/// the start offset in `[0, m - l)`, then (multivariate only) the channel.
/// The draw order is part of the seeded output and must not change.
pub fn sample_shapelets<R: Rng + ?Sized>(
    data: &Dataset<'_>,
    allocation: &LengthAllocation,
    rng: &mut R,
) -> Result<Vec<Shapelet>, ShapeletError> {
    let n = data.n_series();
    let m = data.series_len();
    let channels = data.channels();
    if n == 0 || channels == 0 {
        return Err(ShapeletError::EmptyDataset);
    }

    let mut shapelets = Vec::with_capacity(allocation.total());
    for (length, count) in allocation.iter() {
        if count == 0 {
            continue;
        }
        if length >= m {
            return Err(ShapeletError::InvalidWindowLength {
                length,
                series_length: m,
            });
        }

        for _ in 0..count {
            let series = rng.gen_range(0..n);
            let offset = rng.gen_range(0..m - length);
            let channel = if data.is_multivariate() {
                Some(rng.gen_range(0..channels))
            } else {
                None
            };

            let windows = RollingWindows::new(data.series(series, channel.unwrap_or(0)), length)?;
            let values = windows
                .get(offset)
                .ok_or(ShapeletError::InvalidWindowLength {
                    length,
                    series_length: m,
                })?
                .to_vec();

            shapelets.push(Shapelet {
                values,
                channel,
                series,
                offset,
            });
        }
    }

    Ok(shapelets)
}
