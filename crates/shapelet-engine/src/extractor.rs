//! Ultra-Fast Shapelets Extractor

use crate::allocation::{candidate_budget, LengthAllocation};
use crate::candidates::{length_weights, MIN_WEIGHTED_LENGTH};
use crate::config::ShapeletConfig;
use crate::dataset::Dataset;
use crate::distance::shapelet_transform;
use crate::error::ShapeletError;
use crate::sampler::{sample_shapelets, Shapelet};
use ndarray::Array2;
use tracing::{debug, info};

/// State retained after a successful fit
#[derive(Debug, Clone)]
pub struct FittedState {
    /// Number of shapelets (`p`)
    pub budget: usize,
    /// Shapelets per length bucket
    pub allocation: LengthAllocation,
    /// Sampled shapelets, in feature column order
    pub shapelets: Vec<Shapelet>,
    /// Whether the fit data was multivariate
    pub multivariate: bool,
    /// Channels per timestep at fit time
    pub channels: usize,
}

impl FittedState {
    fn layout_name(&self) -> &'static str {
        if self.multivariate {
            "multivariate"
        } else {
            "univariate"
        }
    }
}

/// Random shapelet feature extractor
pub struct UltraFastShapelets {
    config: ShapeletConfig,
    state: Option<FittedState>,
}

impl UltraFastShapelets {
    /// Create an extractor, rejecting an invalid candidate percentage
    pub fn new(config: ShapeletConfig) -> Result<Self, ShapeletError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
        })
    }

    pub fn config(&self) -> &ShapeletConfig {
        &self.config
    }

    /// Whether `transform` can be called
    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&FittedState> {
        self.state.as_ref()
    }

    /// Fitted shapelets, empty before fit
    pub fn shapelets(&self) -> &[Shapelet] {
        self.state
            .as_ref()
            .map(|s| s.shapelets.as_slice())
            .unwrap_or(&[])
    }

    pub fn allocation(&self) -> Option<&LengthAllocation> {
        self.state.as_ref().map(|s| &s.allocation)
    }

    /// Number of feature columns, zero before fit
    pub fn budget(&self) -> usize {
        self.state.as_ref().map(|s| s.budget).unwrap_or(0)
    }

    /// Sample shapelets from `data`. A failed fit leaves the extractor unfit.
    pub fn fit<'a>(&mut self, data: impl Into<Dataset<'a>>) -> Result<&mut Self, ShapeletError> {
        self.state = None;
        let state = self.extract(&data.into())?;
        self.state = Some(state);
        Ok(self)
    }

    /// Distance of every series in `data` to every fitted shapelet
    ///
    /// `data` must have the layout and channel count seen at fit; row count
    /// and series length may differ.
    pub fn transform<'a>(
        &self,
        data: impl Into<Dataset<'a>>,
    ) -> Result<Array2<f64>, ShapeletError> {
        let state = self.state.as_ref().ok_or(ShapeletError::NotFitted)?;
        let data = data.into();

        if data.is_multivariate() != state.multivariate {
            return Err(ShapeletError::LayoutMismatch {
                expected: state.layout_name(),
                actual: data.layout_name(),
            });
        }
        if data.channels() != state.channels {
            return Err(ShapeletError::ChannelCountMismatch {
                expected: state.channels,
                actual: data.channels(),
            });
        }

        shapelet_transform(&data, &state.shapelets)
    }

    pub fn fit_transform<'a>(
        &mut self,
        data: impl Into<Dataset<'a>>,
    ) -> Result<Array2<f64>, ShapeletError> {
        let data = data.into();
        self.fit(data)?;
        self.transform(data)
    }

    fn extract(&self, data: &Dataset<'_>) -> Result<FittedState, ShapeletError> {
        let n = data.n_series();
        let m = data.series_len();
        let channels = data.channels();

        if n == 0 || channels == 0 {
            return Err(ShapeletError::EmptyDataset);
        }
        if m < MIN_WEIGHTED_LENGTH {
            return Err(ShapeletError::SeriesTooShort {
                length: m,
                minimum: MIN_WEIGHTED_LENGTH,
            });
        }

        let budget = candidate_budget(n, self.config.keep_candidates_percentage);
        let weights = length_weights(n, m);

        // One generator for allocation and sampling keeps seeded fits identical
        let mut rng = self.config.rng();
        let allocation = LengthAllocation::plan(budget, &weights, &mut rng)?;
        debug!("Length allocation over {} buckets: {:?}", allocation.len(), allocation.counts());

        let shapelets = sample_shapelets(data, &allocation, &mut rng)?;

        info!(
            "Fitted {} shapelets from {} {} series ({} timesteps, {} channels)",
            shapelets.len(),
            n,
            data.layout_name(),
            m,
            channels
        );

        Ok(FittedState {
            budget,
            allocation,
            shapelets,
            multivariate: data.is_multivariate(),
            channels,
        })
    }
}
