//! Sensor model: noisy color measurements conditioned on the grid.

use serde::Serialize;

use hloc_math::normalize;

use crate::belief::Belief;
use crate::error::{LocalizeError, Result};
use crate::grid::{Color, Grid};

/// Measurement noise model.
///
/// A reading reports the true cell color with probability `sensor_right` and
/// the other color otherwise.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SensorModel {
    sensor_right: f64,
}

impl SensorModel {
    /// Create a model; `sensor_right` must lie in [0, 1].
    pub fn new(sensor_right: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&sensor_right) {
            return Err(LocalizeError::InvalidParameter {
                name: "sensor_right",
                value: sensor_right,
            });
        }
        Ok(Self { sensor_right })
    }

    /// Probability that a measurement reports the true cell color.
    pub fn sensor_right(&self) -> f64 {
        self.sensor_right
    }

    /// P(observed | actual) for a single cell.
    pub fn likelihood(&self, actual: Color, observed: Color) -> f64 {
        if actual == observed {
            self.sensor_right
        } else {
            1.0 - self.sensor_right
        }
    }

    /// Correction step: Bayesian reweighting by the observation likelihood,
    /// then renormalization.
    ///
    /// Fails with [`LocalizeError::ImpossibleObservation`] when the
    /// likelihood-weighted mass is zero; the observation contradicts every
    /// cell the belief still considers possible, which indicates inconsistent
    /// modeling assumptions by the caller rather than a state the filter can
    /// recover from. `belief` must be shaped like `grid`.
    pub fn correct(&self, belief: &Belief, grid: &Grid, observation: Color) -> Result<Belief> {
        debug_assert_eq!(
            (belief.rows(), belief.cols()),
            (grid.rows(), grid.cols()),
            "belief and grid shapes must agree"
        );
        let (rows, cols) = (belief.rows(), belief.cols());
        let mut probs = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                probs.push(belief.prob(r, c) * self.likelihood(grid.color_at(r, c), observation));
            }
        }
        if normalize(&mut probs).is_none() {
            return Err(LocalizeError::ImpossibleObservation { observation });
        }
        Ok(Belief::from_parts(rows, cols, probs))
    }
}
