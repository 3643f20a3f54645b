//! Histogram-filter localization for a robot on a colored grid world.
//!
//! This library computes the posterior distribution over a robot's grid
//! position from a history of noisy moves and noisy color measurements:
//! - Uniform prior over all cells
//! - Prediction: toroidal convex-combination blend for each commanded move
//! - Correction: Bayesian reweighting by the measurement likelihood, then
//!   renormalization
//!
//! The main entry points are [`localize`] for the one-shot pipeline and
//! [`HistogramFilter`] for step-by-step control.

pub mod belief;
pub mod error;
pub mod filter;
pub mod grid;
pub mod motion;
pub mod sensor;

pub use belief::Belief;
pub use error::{LocalizeError, Result};
pub use filter::{localize, FilterParams, HistogramFilter};
pub use grid::{Color, Grid};
pub use motion::{Motion, MotionModel};
pub use sensor::SensorModel;
