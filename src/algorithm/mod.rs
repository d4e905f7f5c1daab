/// Engine orchestration: configuration, canvas sizing and layout runs
pub mod engine;
/// Pairwise overlap resolution by radius shrinkage
pub mod overlap;
/// Greedy placement at the point of maximum clearance
pub mod placement;
/// Positioned circles and the layout result
pub mod result;

pub use engine::{LayoutConfig, LayoutRun, PackingEngine};
pub use overlap::ShrinkRule;
pub use result::{LayoutResult, PlacedCircle};
