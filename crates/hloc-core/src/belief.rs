//! Belief state: a probability distribution over grid cells.
//!
//! The filter update equation per timestep:
//!
//!   b'(x) ∝ P(z | x) · Σ_{x'} P(x | x', u) · b(x')
//!
//! where b is the prior belief, u the commanded motion, and z the observed
//! color. [`MotionModel::predict`] computes the inner sum and
//! [`SensorModel::correct`] applies the likelihood and renormalizes; this
//! module owns the distribution itself.
//!
//! [`MotionModel::predict`]: crate::motion::MotionModel::predict
//! [`SensorModel::correct`]: crate::sensor::SensorModel::correct

use serde::Serialize;

use hloc_math::{entropy_nats, l1_distance, total_mass};

use crate::error::{LocalizeError, Result};

/// Tolerance accepted on the total mass of an externally supplied belief.
const SUM_TOLERANCE: f64 = 1e-6;

/// Probability distribution over the cells of an R×C grid.
///
/// Entries are non-negative and sum to 1.0. Every update produces a new
/// `Belief`; values are never aliased or mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Belief {
    rows: usize,
    cols: usize,
    probs: Vec<f64>,
}

impl Belief {
    /// Uniform belief: every cell gets 1/(R·C).
    pub fn uniform(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LocalizeError::InvalidDimensions { rows, cols });
        }
        let p = 1.0 / (rows * cols) as f64;
        Ok(Self {
            rows,
            cols,
            probs: vec![p; rows * cols],
        })
    }

    /// Build a belief from nested rows, validating shape, entry range, and
    /// total mass (must be 1.0 ± 1e-6).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(LocalizeError::InvalidDimensions {
                rows: n_rows,
                cols: n_cols,
            });
        }
        let mut probs = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(LocalizeError::InvalidDimensions {
                    rows: n_rows,
                    cols: row.len(),
                });
            }
            for &p in row {
                if !(0.0..=1.0).contains(&p) {
                    return Err(LocalizeError::InvalidParameter {
                        name: "cell probability",
                        value: p,
                    });
                }
                probs.push(p);
            }
        }
        let mass = total_mass(&probs);
        if (mass - 1.0).abs() > SUM_TOLERANCE {
            return Err(LocalizeError::InvalidParameter {
                name: "belief mass",
                value: mass,
            });
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            probs,
        })
    }

    /// Belief concentrated entirely on one cell.
    ///
    /// # Panics
    /// Panics if `at` lies outside the grid.
    pub fn certain(rows: usize, cols: usize, at: (usize, usize)) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LocalizeError::InvalidDimensions { rows, cols });
        }
        assert!(
            at.0 < rows && at.1 < cols,
            "cell {at:?} outside {rows}x{cols} grid"
        );
        let mut probs = vec![0.0; rows * cols];
        probs[at.0 * cols + at.1] = 1.0;
        Ok(Self { rows, cols, probs })
    }

    /// Internal constructor for update steps that preserve the invariants by
    /// construction.
    pub(crate) fn from_parts(rows: usize, cols: usize, probs: Vec<f64>) -> Self {
        debug_assert_eq!(probs.len(), rows * cols);
        Self { rows, cols, probs }
    }

    /// Belief height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Belief width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Probability that the robot occupies `(row, col)`.
    pub fn prob(&self, row: usize, col: usize) -> f64 {
        self.probs[row * self.cols + col]
    }

    /// The distribution in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// The posterior as nested rows, the plain matrix form.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.probs.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Total mass; ≈1 for every reachable belief, exposed for diagnostics.
    pub fn total_mass(&self) -> f64 {
        total_mass(&self.probs)
    }

    /// Most likely cell as `(row, col)`; ties break toward the earliest cell
    /// in row-major order.
    pub fn argmax(&self) -> (usize, usize) {
        let (idx, _) = self
            .probs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .expect("belief has at least one cell");
        (idx / self.cols, idx % self.cols)
    }

    /// Probability of the most likely cell.
    pub fn max_prob(&self) -> f64 {
        self.probs.iter().cloned().fold(0.0, f64::max)
    }

    /// Shannon entropy in nats: ln(R·C) when uniform, 0 when certain.
    pub fn entropy(&self) -> f64 {
        entropy_nats(&self.probs)
    }

    /// L1 distance to another belief of the same shape.
    ///
    /// Debug-asserts matching shapes.
    pub fn l1_distance(&self, other: &Belief) -> f64 {
        debug_assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "l1_distance on mismatched shapes"
        );
        l1_distance(&self.probs, &other.probs)
    }
}

/// One bracketed row per line, five decimals per cell.
impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.probs.chunks(self.cols) {
            write!(f, "[")?;
            for (i, p) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{p:.5}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
