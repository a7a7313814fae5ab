//! Minimum Distance Features

use crate::dataset::Dataset;
use crate::error::ShapeletError;
use crate::sampler::Shapelet;
use ndarray::{Array2, ArrayView1};
use rolling_window::RollingWindows;
use tracing::debug;

/// Regularizer added to the standard deviation before z-normalization
pub const EPSILON: f64 = 1e-6;

/// Mean and population standard deviation
fn moments(values: ArrayView1<'_, f64>) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

fn znormalize(values: ArrayView1<'_, f64>) -> Vec<f64> {
    let (mean, std_dev) = moments(values);
    let scale = std_dev + EPSILON;
    values.iter().map(|v| (v - mean) / scale).collect()
}

/// Smallest distance between the z-normalized shapelet and any z-normalized window.
///
/// Each window is normalized with its own mean and standard deviation, so
/// the score ignores the offset and scale of the matched region.
pub fn min_znorm_distance(
    series: ArrayView1<'_, f64>,
    shapelet: ArrayView1<'_, f64>,
) -> Result<f64, ShapeletError> {
    let target = znormalize(shapelet);
    let windows = RollingWindows::new(series, shapelet.len())?;

    Ok(windows
        .map(|window| {
            let (mean, std_dev) = moments(window);
            let scale = std_dev + EPSILON;
            target
                .iter()
                .zip(window.iter())
                .map(|(s, x)| {
                    let d = s - (x - mean) / scale;
                    d * d
                })
                .sum::<f64>()
                .sqrt()
        })
        .fold(f64::INFINITY, f64::min))
}

/// Smallest Euclidean distance between the shapelet and any raw window
pub fn min_raw_distance(
    series: ArrayView1<'_, f64>,
    shapelet: ArrayView1<'_, f64>,
) -> Result<f64, ShapeletError> {
    let windows = RollingWindows::new(series, shapelet.len())?;

    Ok(windows
        .map(|window| {
            shapelet
                .iter()
                .zip(window.iter())
                .map(|(s, x)| (s - x) * (s - x))
                .sum::<f64>()
                .sqrt()
        })
        .fold(f64::INFINITY, f64::min))
}

/// Build the `n × p` feature matrix; column `j` scores every series against shapelet `j`
pub fn shapelet_transform(
    data: &Dataset<'_>,
    shapelets: &[Shapelet],
) -> Result<Array2<f64>, ShapeletError> {
    let n = data.n_series();
    let m = data.series_len();
    let channels = data.channels();

    debug!(
        "Transforming {} series ({} timesteps) against {} shapelets",
        n,
        m,
        shapelets.len()
    );

    let mut output = Array2::zeros((n, shapelets.len()));
    for (j, shapelet) in shapelets.iter().enumerate() {
        if shapelet.len() > m {
            return Err(ShapeletError::InvalidWindowLength {
                length: shapelet.len(),
                series_length: m,
            });
        }

        let channel = match (data.is_multivariate(), shapelet.channel()) {
            (false, None) => None,
            (true, Some(channel)) if channel < channels => Some(channel),
            (true, Some(channel)) => {
                return Err(ShapeletError::ChannelOutOfRange { channel, channels });
            }
            (true, None) => {
                return Err(ShapeletError::LayoutMismatch {
                    expected: "univariate",
                    actual: data.layout_name(),
                });
            }
            (false, Some(_)) => {
                return Err(ShapeletError::LayoutMismatch {
                    expected: "multivariate",
                    actual: data.layout_name(),
                });
            }
        };

        for i in 0..n {
            output[[i, j]] = match channel {
                None => min_znorm_distance(data.series(i, 0), shapelet.view())?,
                Some(k) => min_raw_distance(data.series(i, k), shapelet.view())?,
            };
        }
    }

    Ok(output)
}
