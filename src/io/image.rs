//! PNG preview of a layout with one flat-coloured disc per motif

use std::path::Path;

use image::{Rgba, RgbaImage};
use num_traits::ToPrimitive;

use crate::algorithm::result::{LayoutResult, PlacedCircle};
use crate::io::error::{LayoutError, Result, WithPath, invalid_input, invalid_parameter};

/// Largest preview edge in pixels
pub const MAX_PREVIEW_DIMENSION: u32 = 16_384;

const CANVAS_OUTLINE: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Stable, well spread colour for a motif id
pub fn motif_color(id: i64) -> Rgba<u8> {
    // splitmix64 finalizer
    let mut z = (id as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;

    let [r, g, b, ..] = z.to_le_bytes();
    // Keep discs visible against the transparent background
    Rgba([r | 0x40, g | 0x40, b | 0x40, 255])
}

/// Rasterize a layout at `scale` pixels per canvas unit
///
/// # Errors
///
/// Returns an error if:
/// - The layout has no canvas (nothing was laid out)
/// - The scale is non-positive or the image would exceed [`MAX_PREVIEW_DIMENSION`]
pub fn render_preview(layout: &LayoutResult, scale: f64) -> Result<RgbaImage> {
    let canvas = layout
        .canvas
        .ok_or_else(|| invalid_input(&"layout has no canvas to render"))?;

    if !scale.is_finite() || scale <= 0.0 {
        return Err(invalid_parameter(
            "preview_scale",
            &scale,
            &"must be positive and finite",
        ));
    }

    let width = preview_dimension(canvas.width * scale)?;
    let height = preview_dimension(canvas.height * scale)?;
    let mut img = RgbaImage::new(width, height);

    for circle in &layout.circles {
        draw_disc(&mut img, circle, scale);
    }
    draw_outline(&mut img);

    Ok(img)
}

/// Render a layout preview and save it as PNG
///
/// # Errors
///
/// Returns an error if rendering fails, the parent directory cannot be
/// created, or the image cannot be saved
pub fn export_layout_preview(layout: &LayoutResult, scale: f64, output_path: &Path) -> Result<()> {
    let img = render_preview(layout, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| LayoutError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

fn preview_dimension(extent: f64) -> Result<u32> {
    extent
        .ceil()
        .to_u32()
        .filter(|&d| d > 0 && d <= MAX_PREVIEW_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "preview_scale",
                &extent,
                &format!("preview edge must be within 1..={MAX_PREVIEW_DIMENSION} pixels"),
            )
        })
}

// Fills pixels whose centers fall inside the circle
fn draw_disc(img: &mut RgbaImage, circle: &PlacedCircle, scale: f64) {
    if circle.r <= 0.0 {
        return;
    }

    let color = motif_color(circle.id);
    let (left, top) = circle.top_left();
    let span = |lo: f64, hi: f64, limit: u32| {
        let start = (lo * scale).floor().max(0.0).to_u32().unwrap_or(0);
        let end = (hi * scale).ceil().to_u32().unwrap_or(limit).min(limit);
        start..end
    };

    let r2 = circle.r * circle.r;
    for py in span(top, top + circle.diameter(), img.height()) {
        let cy = (f64::from(py) + 0.5) / scale - circle.y;
        for px in span(left, left + circle.diameter(), img.width()) {
            let cx = (f64::from(px) + 0.5) / scale - circle.x;
            if cx.mul_add(cx, cy * cy) <= r2 {
                if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }
}

fn draw_outline(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);

    for x in 0..width {
        for y in [0, last_y] {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = CANVAS_OUTLINE;
            }
        }
    }
    for y in 0..height {
        for x in [0, last_x] {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = CANVAS_OUTLINE;
            }
        }
    }
}
