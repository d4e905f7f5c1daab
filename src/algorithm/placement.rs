//! Greedy placement of circles at the most open point of the canvas

use std::collections::VecDeque;

use crate::algorithm::result::PlacedCircle;
use crate::io::configuration::JITTER_DIVISOR;
use crate::math::random::RandomSource;
use crate::motif::catalog::Motif;
use crate::spatial::clearance::ClearanceGrid;

/// Places motifs one at a time, smallest radius first
///
/// Small circles go down first and fill the open field evenly; by the time
/// the large ones come up, the biggest remaining gaps are where the grid
/// reports the most clearance. Ties in radius keep the input order.
#[derive(Debug, Clone)]
pub struct GreedyPlacer {
    grid: ClearanceGrid,
    queue: VecDeque<Motif>,
    placed: Vec<PlacedCircle>,
    jitter_scale: f64,
}

impl GreedyPlacer {
    /// Queue motifs for placement on a freshly initialized grid
    pub fn new(grid: ClearanceGrid, mut motifs: Vec<Motif>, jitter_scale: f64) -> Self {
        motifs.sort_by(|a, b| a.radius.total_cmp(&b.radius));
        let placed = Vec::with_capacity(motifs.len());

        Self {
            grid,
            queue: motifs.into(),
            placed,
            jitter_scale,
        }
    }

    /// Total number of motifs handled by this placer
    pub fn total(&self) -> usize {
        self.queue.len() + self.placed.len()
    }

    /// Number of circles placed so far
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Check whether every motif has been placed
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// Current state of the clearance field
    pub const fn grid(&self) -> &ClearanceGrid {
        &self.grid
    }

    /// Circles placed so far, in placement order
    pub fn placed(&self) -> &[PlacedCircle] {
        &self.placed
    }

    /// Place the next motif in radius order
    ///
    /// The circle goes to the center of the cell with the largest clearance,
    /// nudged on both axes by `jitter_scale · U(0,1) · (clearance − r) / 100`
    /// so the output does not line up with the grid. Returns `None` once all
    /// motifs are placed.
    pub fn place_next(&mut self, random: &mut RandomSource) -> Option<&PlacedCircle> {
        let peak = self.grid.find_max_clearance()?;
        let motif = self.queue.pop_front()?;

        let (cell_x, cell_y) = self.grid.cell_center(peak.row, peak.col);
        let offset = (peak.clearance - motif.radius) / JITTER_DIVISOR;
        let x = (self.jitter_scale * random.unit()).mul_add(offset, cell_x);
        let y = (self.jitter_scale * random.unit()).mul_add(offset, cell_y);

        self.grid.apply_circle(x, y, motif.radius);

        self.placed.push(PlacedCircle {
            id: motif.id,
            x,
            y,
            r: motif.radius,
            source: motif.source,
        });
        self.placed.last()
    }

    /// Release the placed circles
    pub fn into_circles(self) -> Vec<PlacedCircle> {
        self.placed
    }
}
