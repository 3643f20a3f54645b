//! Grid world representation: a fixed rectangular matrix of colored cells.

use serde::{Deserialize, Serialize};

use crate::error::{LocalizeError, Result};

/// Cell color observable by the robot's sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
}

impl Color {
    /// The full sensing alphabet.
    pub const ALL: [Color; 2] = [Color::Red, Color::Green];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "R"),
            Color::Green => write!(f, "G"),
        }
    }
}

/// Immutable R×C matrix of cell colors; the map the robot drives on.
///
/// Row 0 is the top of the map and column 0 its left edge; row indices grow
/// downward, column indices grow rightward. Fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// Fails with [`LocalizeError::InvalidDimensions`] when the input is
    /// empty or ragged.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(LocalizeError::InvalidDimensions {
                rows: n_rows,
                cols: n_cols,
            });
        }
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(LocalizeError::InvalidDimensions {
                    rows: n_rows,
                    cols: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Grid height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell by construction.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Color of the cell at `(row, col)`.
    pub fn color_at(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Green as G, Red as R};

    #[test]
    fn test_from_rows_shape_and_lookup() {
        let grid = Grid::from_rows(vec![vec![G, G, G], vec![G, R, G]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
        assert_eq!(grid.color_at(0, 0), G);
        assert_eq!(grid.color_at(1, 1), R);
        assert_eq!(grid.color_at(1, 2), G);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            Grid::from_rows(vec![]),
            Err(LocalizeError::InvalidDimensions { rows: 0, cols: 0 })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![], vec![]]),
            Err(LocalizeError::InvalidDimensions { rows: 2, cols: 0 })
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Grid::from_rows(vec![vec![G, G], vec![G]]);
        assert!(matches!(
            result,
            Err(LocalizeError::InvalidDimensions { rows: 2, cols: 1 })
        ));
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::from_rows(vec![vec![R]]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (1, 1));
        assert_eq!(grid.color_at(0, 0), R);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{R}"), "R");
        assert_eq!(format!("{G}"), "G");
    }

    #[test]
    fn test_color_alphabet() {
        assert_eq!(Color::ALL.len(), 2);
        assert!(Color::ALL.contains(&R));
        assert!(Color::ALL.contains(&G));
    }
}
