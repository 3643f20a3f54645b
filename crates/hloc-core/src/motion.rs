//! Motion model: commanded grid moves that may fail.
//!
//! A commanded offset (dy, dx) succeeds with probability `p_move`; otherwise
//! the robot stays where it is. It never overshoots or drifts sideways. The
//! grid is toroidal, so a successful move off one edge reappears on the
//! opposite edge.

use serde::{Deserialize, Serialize};

use hloc_math::wrap_index;

use crate::belief::Belief;
use crate::error::{LocalizeError, Result};

/// Commanded offset in grid cells: `dy` rows down, `dx` columns right.
///
/// Four-connected single steps in practice, but any integer offset is
/// accepted; indices wrap modulo the grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    pub dy: i32,
    pub dx: i32,
}

impl Motion {
    /// The zero offset: stay in place.
    pub const STAY: Motion = Motion { dy: 0, dx: 0 };

    pub fn new(dy: i32, dx: i32) -> Self {
        Self { dy, dx }
    }

    /// Whether this is the zero offset.
    pub fn is_stay(self) -> bool {
        self.dy == 0 && self.dx == 0
    }
}

/// Motion uncertainty model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MotionModel {
    p_move: f64,
}

impl MotionModel {
    /// Create a model; `p_move` must lie in [0, 1].
    pub fn new(p_move: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p_move) {
            return Err(LocalizeError::InvalidParameter {
                name: "p_move",
                value: p_move,
            });
        }
        Ok(Self { p_move })
    }

    /// Probability that a commanded move actually happens.
    pub fn p_move(&self) -> f64 {
        self.p_move
    }

    /// Prediction step: account for one uncertain move.
    ///
    /// For the zero offset this is an exact identity; there is nowhere else
    /// to go, and applying the success/failure split would double-count the
    /// stay outcome. For any other offset each cell receives a convex
    /// combination of "was here and the move failed" and "was one commanded
    /// offset behind (toroidally) and the move succeeded":
    ///
    ///   new[r][c] = old[r][c]·(1−p) + old[(r−dy) mod R][(c−dx) mod C]·p
    ///
    /// One joint pass over the grid. Blending each axis separately is only
    /// exact for axis-aligned offsets and introduces spurious cross terms for
    /// diagonal or multi-cell moves.
    pub fn predict(&self, belief: &Belief, motion: Motion) -> Belief {
        if motion.is_stay() {
            return belief.clone();
        }
        let (rows, cols) = (belief.rows(), belief.cols());
        let p = self.p_move;
        let mut probs = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            let src_r = wrap_index(r as i64 - i64::from(motion.dy), rows);
            for c in 0..cols {
                let src_c = wrap_index(c as i64 - i64::from(motion.dx), cols);
                probs.push(belief.prob(r, c) * (1.0 - p) + belief.prob(src_r, src_c) * p);
            }
        }
        Belief::from_parts(rows, cols, probs)
    }
}
