//! Discrete size palette the motif radii are drawn from

use crate::io::error::{Result, invalid_parameter};
use crate::math::random::RandomSource;

/// Weighted multiset of plausible motif radii
///
/// Sizes are repeated to weight them; each draw picks one entry uniformly.
pub const SIZE_PALETTE: [f64; 73] = [
    57.0, 58.0, 58.0, 58.0, 60.0, 60.0, 62.0, 64.0, 65.0, 66.0, 67.0, 68.0, 78.0, 80.0, 82.0,
    84.0, 89.0, 90.0, 93.0, 91.0, 90.0, 87.0, 138.0, 150.0, //
    57.0, 58.0, 58.0, 58.0, 60.0, 60.0, 62.0, 64.0, 65.0, 66.0, 67.0, 68.0, 78.0, 80.0, 82.0,
    84.0, 89.0, 90.0, 93.0, 91.0, 90.0, 87.0, 138.0, 150.0, //
    57.0, 58.0, 58.0, 58.0, 60.0, 60.0, 62.0, 64.0, 65.0, 66.0, 67.0, 68.0, 78.0, 80.0, 82.0,
    84.0, 89.0, 90.0, 93.0, 91.0, 90.0, 87.0, 138.0, 150.0, //
    300.0,
];

/// Radius palette sampled uniformly with replacement
#[derive(Debug, Clone, PartialEq)]
pub struct SizePalette {
    sizes: Vec<f64>,
}

impl Default for SizePalette {
    fn default() -> Self {
        Self {
            sizes: SIZE_PALETTE.to_vec(),
        }
    }
}

impl SizePalette {
    /// Create a palette from explicit sizes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the palette is empty or holds a
    /// non-positive or non-finite size
    pub fn new(sizes: Vec<f64>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"palette must contain at least one size",
            ));
        }
        if let Some(bad) = sizes.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(invalid_parameter(
                "palette",
                bad,
                &"sizes must be positive and finite",
            ));
        }
        Ok(Self { sizes })
    }

    /// Sizes in palette order
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Draw `count` radii uniformly with replacement, scaled by `multiplier`
    pub fn draw(&self, count: usize, multiplier: f64, random: &mut RandomSource) -> Vec<f64> {
        (0..count)
            .filter_map(|_| random.choose(&self.sizes).map(|size| size * multiplier))
            .collect()
    }
}
