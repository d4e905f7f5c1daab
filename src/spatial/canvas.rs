//! Canvas sizing from aggregate circle area and viewport aspect ratio

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, degenerate_layout, invalid_input};

/// Display area the layout is shown in
///
/// Only its aspect ratio influences the layout, never its absolute size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width of the display area
    pub width: f64,
    /// Height of the display area
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width to height ratio
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is non-positive or non-finite
    pub fn aspect_ratio(&self) -> Result<f64> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(invalid_input(&format!(
                "viewport must have positive finite dimensions, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(self.width / self.height)
    }
}

/// Rectangle the circles are laid out on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
}

impl Canvas {
    /// Size a canvas so its area is `π · density · Σr²` at the requested aspect ratio
    ///
    /// The area is computed as `n · mean(r²) · π · density`, which keeps the
    /// arithmetic identical to averaging the squared radii first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty radius list or a bad aspect ratio,
    /// and `DegenerateLayout` if the area or either side is zero or non-finite
    pub fn from_radii(radii: &[f64], density: f64, aspect_ratio: f64) -> Result<Self> {
        if radii.is_empty() {
            return Err(invalid_input(&"cannot size a canvas for zero circles"));
        }
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(invalid_input(&format!(
                "aspect ratio must be positive and finite, got {aspect_ratio}"
            )));
        }

        let count = radii.len() as f64;
        let mean_square_radius = radii.iter().map(|r| r * r).sum::<f64>() / count;
        let area = count * mean_square_radius * std::f64::consts::PI * density;

        if !area.is_finite() || area <= 0.0 {
            return Err(degenerate_layout(
                "canvas sizing",
                &format!("aggregate circle area is {area}"),
            ));
        }

        let height = (area / aspect_ratio).sqrt();
        let width = aspect_ratio * height;

        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(degenerate_layout(
                "canvas sizing",
                &format!("canvas dimensions {width}x{height} are not usable"),
            ));
        }

        Ok(Self { width, height })
    }

    /// Canvas area
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width to height ratio
    pub const fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Edge length of a clearance grid cell, `(width · height)^(1/4)`
    pub fn cell_size(&self) -> f64 {
        self.area().sqrt().sqrt()
    }

    /// Check whether a point lies within the canvas, edges included
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}
