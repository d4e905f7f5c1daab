//! Layout output handed to the render step

use serde::{Deserialize, Serialize};

use crate::math::geometry::distance;
use crate::spatial::canvas::Canvas;

/// A motif circle at its final position
///
/// The position is fixed once placed; only the radius may shrink during
/// overlap resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCircle {
    /// Motif identifier
    pub id: i64,
    /// Center x coordinate
    pub x: f64,
    /// Center y coordinate
    pub y: f64,
    /// Radius
    pub r: f64,
    /// Opaque source reference of the motif
    #[serde(rename = "url")]
    pub source: String,
}

impl PlacedCircle {
    /// Center point (x, y)
    pub const fn center(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Distance between the centers of two circles
    pub fn center_distance(&self, other: &Self) -> f64 {
        distance(self.center(), other.center())
    }

    /// Check whether two circles strictly overlap
    pub fn overlaps(&self, other: &Self) -> bool {
        self.center_distance(other) < self.r + other.r
    }

    /// Top-left corner of the bounding square, where the image is drawn
    pub const fn top_left(&self) -> (f64, f64) {
        (self.x - self.r, self.y - self.r)
    }

    /// Drawn image edge length
    pub const fn diameter(&self) -> f64 {
        2.0 * self.r
    }
}

/// Positioned circles together with the canvas they were laid out on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Canvas dimensions, `None` when there was nothing to lay out
    pub canvas: Option<Canvas>,
    /// Circles in placement order
    pub circles: Vec<PlacedCircle>,
}

impl LayoutResult {
    /// Layout of an empty motif set: no canvas, no circles
    pub const fn empty() -> Self {
        Self {
            canvas: None,
            circles: Vec::new(),
        }
    }

    /// Number of placed circles
    pub const fn len(&self) -> usize {
        self.circles.len()
    }

    /// Check whether the layout holds no circles
    pub const fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Find a circle by motif id
    pub fn circle(&self, id: i64) -> Option<&PlacedCircle> {
        self.circles.iter().find(|c| c.id == id)
    }

    /// Count circle pairs that still overlap
    pub fn residual_overlaps(&self) -> usize {
        crate::algorithm::overlap::count_overlaps(&self.circles)
    }
}
