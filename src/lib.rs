//! Dense, irregular circle packing for motif maps
//!
//! Given a set of image motifs and a viewport, the engine sizes a canvas so
//! its area matches the total circle area scaled by a density factor, drops
//! each circle at the most open point left on the canvas, and finally shrinks
//! overlapping pairs. The result is a list of positioned circles ready to be
//! drawn as round image tiles.

#![forbid(unsafe_code)]

/// Packing engine: placement, overlap resolution and layout orchestration
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Geometry helpers and seeded randomness
pub mod math;
/// Motif records, selection and size palette
pub mod motif;
/// Canvas sizing and the clearance field
pub mod spatial;

pub use algorithm::{LayoutConfig, LayoutResult, PackingEngine, PlacedCircle, ShrinkRule};
pub use io::error::{LayoutError, Result};
pub use motif::{Motif, MotifRecord};
pub use spatial::{Canvas, Viewport};
