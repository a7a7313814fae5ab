//! Per-Sensor Extraction over Ragged Instances

use crate::config::ShapeletConfig;
use crate::error::ShapeletError;
use crate::extractor::UltraFastShapelets;
use ndarray::{s, Array2};
use series_prep::{max_length, pad_to_matrix};
use tracing::info;

/// Runs one univariate extractor per sensor.
///
/// Input is one `Vec` of instances per sensor; instances may have different
/// lengths and are padded with the configured [`crate::MaskingStrategy`].
/// Output columns are the per-sensor feature matrices side by side, in
/// sensor order.
pub struct PerSensorShapelets {
    config: ShapeletConfig,
    /// One fitted extractor per sensor
    extractors: Vec<UltraFastShapelets>,
    /// Longest instance per sensor at fit time
    max_lengths: Vec<usize>,
}

impl PerSensorShapelets {
    pub fn new(config: ShapeletConfig) -> Result<Self, ShapeletError> {
        config.validate()?;
        Ok(Self {
            config,
            extractors: Vec::new(),
            max_lengths: Vec::new(),
        })
    }

    pub fn is_fitted(&self) -> bool {
        !self.extractors.is_empty()
    }

    /// Fitted extractor for one sensor
    pub fn extractor(&self, sensor: usize) -> Option<&UltraFastShapelets> {
        self.extractors.get(sensor)
    }

    /// Total number of feature columns
    pub fn n_features(&self) -> usize {
        self.extractors.iter().map(UltraFastShapelets::budget).sum()
    }

    pub fn fit(&mut self, sensors: &[Vec<Vec<f64>>]) -> Result<&mut Self, ShapeletError> {
        self.extractors.clear();
        self.max_lengths.clear();
        check_instance_counts(sensors)?;

        let mut rng = self.config.rng();
        let mut extractors = Vec::with_capacity(sensors.len());
        let mut max_lengths = Vec::with_capacity(sensors.len());

        for instances in sensors {
            let target_len = max_length(instances);
            let matrix = pad_to_matrix(instances, self.config.masking, target_len, &mut rng)?;

            let mut extractor = UltraFastShapelets::new(self.config.clone())?;
            extractor.fit(&matrix)?;

            extractors.push(extractor);
            max_lengths.push(target_len);
        }

        info!(
            "Fitted {} sensors, {} features in total",
            extractors.len(),
            extractors.iter().map(UltraFastShapelets::budget).sum::<usize>()
        );

        self.extractors = extractors;
        self.max_lengths = max_lengths;
        Ok(self)
    }

    pub fn transform(&self, sensors: &[Vec<Vec<f64>>]) -> Result<Array2<f64>, ShapeletError> {
        if !self.is_fitted() {
            return Err(ShapeletError::NotFitted);
        }
        if sensors.len() != self.extractors.len() {
            return Err(ShapeletError::SensorCountMismatch {
                expected: self.extractors.len(),
                actual: sensors.len(),
            });
        }
        check_instance_counts(sensors)?;

        let mut rng = self.config.rng();
        let n = sensors[0].len();
        let mut output = Array2::zeros((n, self.n_features()));
        let mut column = 0;

        for ((instances, extractor), &fit_len) in
            sensors.iter().zip(&self.extractors).zip(&self.max_lengths)
        {
            let target_len = fit_len.max(max_length(instances));
            let matrix = pad_to_matrix(instances, self.config.masking, target_len, &mut rng)?;
            let features = extractor.transform(&matrix)?;

            let width = features.ncols();
            output
                .slice_mut(s![.., column..column + width])
                .assign(&features);
            column += width;
        }

        Ok(output)
    }

    pub fn fit_transform(
        &mut self,
        sensors: &[Vec<Vec<f64>>],
    ) -> Result<Array2<f64>, ShapeletError> {
        self.fit(sensors)?;
        self.transform(sensors)
    }
}

fn check_instance_counts(sensors: &[Vec<Vec<f64>>]) -> Result<(), ShapeletError> {
    let expected = sensors.first().map(Vec::len).ok_or(ShapeletError::EmptyDataset)?;
    if expected == 0 {
        return Err(ShapeletError::EmptyDataset);
    }
    for (sensor, instances) in sensors.iter().enumerate() {
        if instances.len() != expected {
            return Err(ShapeletError::InstanceCountMismatch {
                sensor,
                expected,
                actual: instances.len(),
            });
        }
    }
    Ok(())
}
