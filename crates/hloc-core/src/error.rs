//! Error types for grid localization.
//!
//! All validation is eager: inputs are checked when a grid, belief, or
//! parameter set is constructed, and a sense step fails the moment its total
//! likelihood-weighted mass reaches zero. Nothing is retried; the computation
//! is deterministic, so a retry cannot change the outcome.

use thiserror::Error;

use crate::grid::Color;

/// Result type alias for localization operations.
pub type Result<T> = std::result::Result<T, LocalizeError>;

/// Errors raised while building or running the filter.
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// The grid or belief input has zero rows, zero columns, or ragged rows.
    /// For ragged input, `cols` reports the length of the offending row.
    #[error("grid must be rectangular with at least one row and one column (rows={rows}, cols={cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Measurements and motions are consumed in lockstep, one pair per
    /// timestep, so their lengths must agree.
    #[error("measurements ({measurements}) and motions ({motions}) differ in length")]
    LengthMismatch { measurements: usize, motions: usize },

    /// A probability parameter fell outside [0, 1].
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A sense step had zero posterior mass: the observation contradicts
    /// every cell the belief still considers possible.
    #[error("observation {observation} has zero likelihood-weighted mass under the current belief")]
    ImpossibleObservation { observation: Color },
}
