//! Histogram filter driver: fold motion/measurement pairs over a belief.
//!
//! Each timestep visits exactly two states in fixed order, MOVE → SENSE:
//!
//!   b_t = correct(predict(b_{t−1}, u_t), z_t)
//!
//! starting from the uniform belief over the grid. Steps are strictly
//! sequential; each depends on the previous posterior.

use serde::{Deserialize, Serialize};

use crate::belief::Belief;
use crate::error::{LocalizeError, Result};
use crate::grid::{Color, Grid};
use crate::motion::{Motion, MotionModel};
use crate::sensor::SensorModel;

/// Filter parameters. Validated when a [`HistogramFilter`] is built from
/// them, so a deserialized block cannot smuggle in out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Probability a measurement reports the true cell color.
    pub sensor_right: f64,
    /// Probability a commanded move actually happens.
    pub p_move: f64,
}

/// The complete filter: a grid world plus motion and sensor models.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramFilter {
    grid: Grid,
    motion: MotionModel,
    sensor: SensorModel,
}

impl HistogramFilter {
    /// Bind a grid to validated parameters.
    pub fn new(grid: Grid, params: FilterParams) -> Result<Self> {
        Ok(Self {
            motion: MotionModel::new(params.p_move)?,
            sensor: SensorModel::new(params.sensor_right)?,
            grid,
        })
    }

    /// The world this filter runs on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The uniform starting belief for this grid.
    pub fn uniform_belief(&self) -> Belief {
        Belief::uniform(self.grid.rows(), self.grid.cols())
            .expect("grid dimensions were validated at construction")
    }

    /// One MOVE → SENSE transition.
    pub fn step(&self, belief: &Belief, motion: Motion, measurement: Color) -> Result<Belief> {
        let predicted = self.motion.predict(belief, motion);
        self.sensor.correct(&predicted, &self.grid, measurement)
    }

    /// Fold the full motion/measurement history from the uniform belief.
    ///
    /// The sequences are consumed in lockstep, one pair per timestep, so
    /// their lengths must agree. An empty history returns the uniform belief
    /// unchanged.
    pub fn run(&self, measurements: &[Color], motions: &[Motion]) -> Result<Belief> {
        if measurements.len() != motions.len() {
            return Err(LocalizeError::LengthMismatch {
                measurements: measurements.len(),
                motions: motions.len(),
            });
        }
        let mut belief = self.uniform_belief();
        for (t, (&measurement, &motion)) in measurements.iter().zip(motions).enumerate() {
            belief = self.step(&belief, motion, measurement)?;
            tracing::debug!(
                target: "hloc_core::filter",
                step = t,
                ?motion,
                %measurement,
                entropy = belief.entropy(),
                max_prob = belief.max_prob(),
                "belief updated"
            );
        }
        Ok(belief)
    }
}

/// Run the whole pipeline in one call: uniform init, then MOVE → SENSE per
/// timestep, returning the posterior over robot positions.
pub fn localize(
    grid: Grid,
    measurements: &[Color],
    motions: &[Motion],
    sensor_right: f64,
    p_move: f64,
) -> Result<Belief> {
    let filter = HistogramFilter::new(
        grid,
        FilterParams {
            sensor_right,
            p_move,
        },
    )?;
    filter.run(measurements, motions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Green as G, Red as R};

    fn small_grid() -> Grid {
        Grid::from_rows(vec![vec![G, G, G], vec![G, R, G], vec![G, G, G]]).unwrap()
    }

    #[test]
    fn test_new_validates_params() {
        let params = FilterParams {
            sensor_right: 1.5,
            p_move: 0.5,
        };
        assert!(matches!(
            HistogramFilter::new(small_grid(), params),
            Err(LocalizeError::InvalidParameter {
                name: "sensor_right",
                ..
            })
        ));

        let params = FilterParams {
            sensor_right: 0.5,
            p_move: -0.5,
        };
        assert!(matches!(
            HistogramFilter::new(small_grid(), params),
            Err(LocalizeError::InvalidParameter { name: "p_move", .. })
        ));
    }

    #[test]
    fn test_run_rejects_length_mismatch() {
        let filter = HistogramFilter::new(
            small_grid(),
            FilterParams {
                sensor_right: 0.8,
                p_move: 0.8,
            },
        )
        .unwrap();
        let result = filter.run(&[R, R], &[Motion::STAY]);
        assert!(matches!(
            result,
            Err(LocalizeError::LengthMismatch {
                measurements: 2,
                motions: 1
            })
        ));
    }

    #[test]
    fn test_empty_history_returns_uniform() {
        let belief = localize(small_grid(), &[], &[], 0.8, 0.8).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                assert!((belief.prob(r, c) - 1.0 / 9.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_certain_models_pin_the_robot() {
        let belief = localize(small_grid(), &[R], &[Motion::STAY], 1.0, 1.0).unwrap();
        assert_eq!(belief.prob(1, 1), 1.0);
        assert_eq!(belief.argmax(), (1, 1));
    }

    #[test]
    fn test_step_matches_run_fold() {
        let filter = HistogramFilter::new(
            small_grid(),
            FilterParams {
                sensor_right: 0.7,
                p_move: 0.9,
            },
        )
        .unwrap();
        let measurements = [R, G];
        let motions = [Motion::new(0, 1), Motion::new(1, 0)];

        let mut by_steps = filter.uniform_belief();
        for (&z, &u) in measurements.iter().zip(&motions) {
            by_steps = filter.step(&by_steps, u, z).unwrap();
        }
        let by_run = filter.run(&measurements, &motions).unwrap();
        assert_eq!(by_steps, by_run);
    }
}
