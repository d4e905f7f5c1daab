//! Spatial data structures for the layout canvas
//!
//! This module contains:
//! - Canvas sizing from circle area and viewport aspect ratio
//! - The clearance field used to find the most open point on the canvas

/// Canvas and viewport geometry
pub mod canvas;
/// Distance field over the canvas, tightened as circles are placed
pub mod clearance;

pub use canvas::{Canvas, Viewport};
pub use clearance::{ClearanceGrid, ClearancePeak};
