//! Dataset Layouts

use ndarray::{s, Array2, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};

/// Borrowed, rectangular time-series dataset.
///
/// Univariate data is shaped `n × m`, multivariate data `n × m × d`
/// (series, timestep, channel).
#[derive(Debug, Clone, Copy)]
pub enum Dataset<'a> {
    Univariate(ArrayView2<'a, f64>),
    Multivariate(ArrayView3<'a, f64>),
}

impl<'a> Dataset<'a> {
    /// Number of series
    pub fn n_series(&self) -> usize {
        match self {
            Dataset::Univariate(x) => x.nrows(),
            Dataset::Multivariate(x) => x.len_of(Axis(0)),
        }
    }

    /// Timesteps per series
    pub fn series_len(&self) -> usize {
        match self {
            Dataset::Univariate(x) => x.ncols(),
            Dataset::Multivariate(x) => x.len_of(Axis(1)),
        }
    }

    /// Channels per timestep (1 for univariate data)
    pub fn channels(&self) -> usize {
        match self {
            Dataset::Univariate(_) => 1,
            Dataset::Multivariate(x) => x.len_of(Axis(2)),
        }
    }

    pub fn is_multivariate(&self) -> bool {
        matches!(self, Dataset::Multivariate(_))
    }

    pub(crate) fn layout_name(&self) -> &'static str {
        if self.is_multivariate() {
            "multivariate"
        } else {
            "univariate"
        }
    }

    /// One channel of one series; `channel` is ignored for univariate data.
    ///
    /// Callers must keep `series < n_series()` and `channel < channels()`.
    pub fn series(&self, series: usize, channel: usize) -> ArrayView1<'a, f64> {
        match *self {
            Dataset::Univariate(x) => x.index_axis_move(Axis(0), series),
            Dataset::Multivariate(x) => x.slice_move(s![series, .., channel]),
        }
    }
}

impl<'a> From<ArrayView2<'a, f64>> for Dataset<'a> {
    fn from(x: ArrayView2<'a, f64>) -> Self {
        Dataset::Univariate(x)
    }
}

impl<'a> From<ArrayView3<'a, f64>> for Dataset<'a> {
    fn from(x: ArrayView3<'a, f64>) -> Self {
        Dataset::Multivariate(x)
    }
}

impl<'a> From<&'a Array2<f64>> for Dataset<'a> {
    fn from(x: &'a Array2<f64>) -> Self {
        Dataset::Univariate(x.view())
    }
}

impl<'a> From<&'a Array3<f64>> for Dataset<'a> {
    fn from(x: &'a Array3<f64>) -> Self {
        Dataset::Multivariate(x.view())
    }
}
