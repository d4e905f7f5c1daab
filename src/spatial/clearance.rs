//! Discretized clearance field over the canvas
//!
//! Each cell stores a conservative estimate of the distance from its center
//! to the nearest placed circle boundary or canvas edge. Values only ever
//! decrease as circles are added, so the cell with the largest value is the
//! most open point left on the canvas.

use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, degenerate_layout};
use crate::math::geometry::distance_squared;
use crate::spatial::canvas::Canvas;

/// Location and value of the most open grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearancePeak {
    /// Row index of the cell
    pub row: usize,
    /// Column index of the cell
    pub col: usize,
    /// Clearance recorded for the cell
    pub clearance: f64,
}

/// Distance field indexed by (`row`, `col`)
#[derive(Debug, Clone)]
pub struct ClearanceGrid {
    clearance: Array2<f64>,
    cell_size: f64,
    width: f64,
    height: f64,
}

impl ClearanceGrid {
    /// Build a grid whose initial clearance is the distance to the canvas edge
    ///
    /// A cell at (`row`, `col`) has its center at
    /// `(cell_size/2 + col·cell_size, cell_size/2 + row·cell_size)`. Cells of
    /// the last row or column may extend past the canvas, in which case their
    /// clearance is negative.
    pub fn new(columns: usize, rows: usize, cell_size: f64, width: f64, height: f64) -> Self {
        let half = cell_size / 2.0;
        let mut clearance = Array2::zeros((rows, columns));

        // Row-wise pass: distance to the nearer horizontal edge
        for ((row, _), value) in clearance.indexed_iter_mut() {
            let y = (row as f64).mul_add(cell_size, half);
            *value = y.min(height - y);
        }

        // Column-wise pass refines with the nearer vertical edge
        for ((_, col), value) in clearance.indexed_iter_mut() {
            let x = (col as f64).mul_add(cell_size, half);
            *value = value.min(x).min(width - x);
        }

        Self {
            clearance,
            cell_size,
            width,
            height,
        }
    }

    /// Build the grid covering a canvas
    ///
    /// Uses `columns = ceil(width / cell_size)` and `rows = ceil(height / cell_size)`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateLayout` if the cell size is unusable or either
    /// dimension exceeds [`MAX_GRID_DIMENSION`]
    pub fn for_canvas(canvas: &Canvas) -> Result<Self> {
        let cell_size = canvas.cell_size();
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(degenerate_layout(
                "grid construction",
                &format!("cell size {cell_size} is not usable"),
            ));
        }

        let columns = grid_dimension(canvas.width / cell_size)?;
        let rows = grid_dimension(canvas.height / cell_size)?;

        Ok(Self::new(
            columns,
            rows,
            cell_size,
            canvas.width,
            canvas.height,
        ))
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.clearance.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.clearance.ncols()
    }

    /// Edge length of a cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Canvas dimensions (width, height) the grid was built for
    pub const fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Clearance stored for a cell, if it exists
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.clearance.get([row, col]).copied()
    }

    /// Center point (x, y) of a cell
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        let half = self.cell_size / 2.0;
        (
            (col as f64).mul_add(self.cell_size, half),
            (row as f64).mul_add(self.cell_size, half),
        )
    }

    /// Linear row-major scan for the cell with the largest clearance
    ///
    /// The first cell holding the maximum wins ties. Returns `None` only for
    /// a grid without cells.
    pub fn find_max_clearance(&self) -> Option<ClearancePeak> {
        let mut peak: Option<ClearancePeak> = None;

        for ((row, col), &clearance) in self.clearance.indexed_iter() {
            if peak.is_none_or(|best| best.clearance < clearance) {
                peak = Some(ClearancePeak {
                    row,
                    col,
                    clearance,
                });
            }
        }

        peak
    }

    /// Absorb a newly placed circle into the field
    ///
    /// A cell is touched only when `(clearance + radius)² > d²`, i.e. the new
    /// circle may sit closer than what the cell already records, and then
    /// takes `min(clearance, d - radius)`. This is a lower bound rather than an
    /// exact distance transform.
    pub fn apply_circle(&mut self, x: f64, y: f64, radius: f64) {
        let cell_size = self.cell_size;
        let half = cell_size / 2.0;

        for ((row, col), value) in self.clearance.indexed_iter_mut() {
            let center = (
                (col as f64).mul_add(cell_size, half),
                (row as f64).mul_add(cell_size, half),
            );
            let d2 = distance_squared(center, (x, y));
            let reach = *value + radius;

            if reach * reach > d2 {
                let d = d2.sqrt() - radius;
                if *value > d {
                    *value = d;
                }
            }
        }
    }
}

// Number of cells needed to cover `span` cell lengths
fn grid_dimension(span: f64) -> Result<usize> {
    span.ceil()
        .to_usize()
        .filter(|&n| n > 0 && n <= MAX_GRID_DIMENSION)
        .ok_or_else(|| {
            degenerate_layout(
                "grid construction",
                &format!("{span} cells per axis is outside 1..={MAX_GRID_DIMENSION}"),
            )
        })
}
