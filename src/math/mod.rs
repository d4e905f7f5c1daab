//! Mathematical utilities for the layout engine

/// Distance computations in the canvas plane
pub mod geometry;
/// Seeded random source for palette sampling, shuffling and jitter
pub mod random;
